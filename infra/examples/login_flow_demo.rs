//! End-to-end demo of the login pipeline with simulated collaborators.
//!
//! Runs the phone-entry -> security-scan -> SMS-verification sequence
//! against the simulated probes and the console channel:
//!
//! ```bash
//! cargo run -p bs_infra --example login_flow_demo
//! ```

use std::error::Error;
use std::sync::Arc;

use bs_core::services::flow::LoginFlow;
use bs_core::services::security::SecurityCheckEngine;
use bs_infra::channel::ConsoleSmsChannel;
use bs_infra::navigation::RecordingNavigator;
use bs_infra::probes::SimulatedProbe;
use bs_infra::store::{BroadcastFlagStore, InMemoryFlagStore};
use bs_shared::config::{SecurityScanConfig, VerificationFlowConfig};

const MAX_SCAN_ATTEMPTS: usize = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let scan_config = SecurityScanConfig::default();
    let engine = Arc::new(SecurityCheckEngine::new(
        SimulatedProbe::battery(&scan_config),
        scan_config,
    ));
    let channel = Arc::new(ConsoleSmsChannel::new());
    let flag_store = Arc::new(BroadcastFlagStore::new(
        Arc::new(InMemoryFlagStore::new()),
        false,
    ));
    let navigator = Arc::new(RecordingNavigator::default());

    // mirror scan progress to the terminal, like the scan screen would
    let mut progress = engine.progress();
    tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let snapshot = *progress.borrow();
            println!("  [{:>3}%] {}", snapshot.percent, snapshot.phase.message());
        }
    });

    let config = VerificationFlowConfig::default().with_expiry_seconds(5);
    let mut flow = LoginFlow::new(
        engine,
        channel,
        flag_store,
        Arc::clone(&navigator),
        config,
    );

    println!("== BharatSecure login demo ==");
    flow.submit_phone("+91 90257 40156")?;

    let mut admitted = false;
    for attempt in 1..=MAX_SCAN_ATTEMPTS {
        println!("\nSecurity scan, attempt {attempt}:");
        let verdict = flow.run_security_check().await?;
        if verdict.overall_passed {
            admitted = true;
            break;
        }
        println!(
            "Security check failed: {:?}",
            verdict
                .failed_checks()
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<_>>()
        );
    }

    if !admitted {
        println!("\nDevice failed verification; returning to login.");
        flow.back_to_login();
        return Ok(());
    }

    println!("\nDispatching verification code...");
    flow.send_code().await?;
    println!("Counting down to expiry...");
    flow.drive_countdown().await?;

    println!("\nRoute history: {:?}", navigator.history());
    Ok(())
}
