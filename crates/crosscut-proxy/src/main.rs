use clap::{Arg, ArgAction, Command};
use crosscut_advice::{AdviceRegistry, Service, Visibility};
use crosscut_proxy::DispatchProxy;
use crosscut_test_utils::{CallRecorder, LedgerService, RelayService};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("crosscut")
        .version("0.1.0")
        .about("Dispatch-proxy interception demo")
        .arg_required_else_help(true)
        .subcommand(Command::new("demo").about("Run the bundled interception scenarios"))
        .subcommand(
            Command::new("report")
                .about("Print the resolved operation surface of the bundled fixtures")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("demo", _)) => run_demo(),
        Some(("report", args)) => run_report(args.get_flag("json")),
        _ => Ok(()),
    }
}

fn run_demo() -> anyhow::Result<()> {
    let recorder = Arc::new(CallRecorder::new());

    println!("Scenario: basic advised/unadvised dispatch");
    let ledger = DispatchProxy::new(LedgerService::new(Arc::clone(&recorder)))?;
    ledger.invoke("post", ())?;
    ledger.invoke("preview", ())?;
    let rejected = ledger.invoke("reject", ());
    println!("  reject failed as expected: {}", rejected.is_err());

    println!();
    println!("Scenario: self-call bypass");
    let relay = DispatchProxy::new(RelayService::new(Arc::clone(&recorder)))?;
    relay.invoke("external", ())?;

    println!();
    println!("Scenario: internal operation through the proxy");
    relay.invoke("internal", ())?;

    println!();
    println!("Recorded calls:");
    println!("  {:<12} advice active", "operation");
    for record in recorder.records() {
        println!("  {:<12} {}", record.operation, record.advice_active);
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct OperationRow {
    service: &'static str,
    operation: String,
    advised: bool,
    visibility: Visibility,
    eligible: bool,
}

fn surface_rows() -> anyhow::Result<Vec<OperationRow>> {
    let recorder = Arc::new(CallRecorder::new());
    let surfaces = vec![
        (
            "ledger",
            LedgerService::new(Arc::clone(&recorder)).operations(),
        ),
        ("relay", RelayService::new(recorder).operations()),
    ];

    let mut rows = Vec::new();
    for (service, mut operations) in surfaces {
        let registry = AdviceRegistry::resolve(operations.clone())?;
        operations.sort_by(|a, b| a.name.cmp(&b.name));
        for op in operations {
            let eligible = registry.is_eligible(&op.name);
            rows.push(OperationRow {
                service,
                operation: op.name,
                advised: op.advised,
                visibility: op.visibility,
                eligible,
            });
        }
    }
    Ok(rows)
}

fn run_report(json: bool) -> anyhow::Result<()> {
    let rows = surface_rows()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("Resolved Operation Surface");
        println!("==========================");
        println!(
            "{:<8} {:<10} {:<8} {:<10} eligible",
            "service", "operation", "advised", "visibility"
        );
        for row in &rows {
            println!(
                "{:<8} {:<10} {:<8} {:<10} {}",
                row.service,
                row.operation,
                row.advised,
                format!("{:?}", row.visibility),
                row.eligible
            );
        }
    }

    Ok(())
}
