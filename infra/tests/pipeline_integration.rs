//! Integration tests wiring the real collaborator implementations into
//! the core pipeline.

use std::sync::Arc;

use bs_core::domain::value_objects::Route;
use bs_core::services::flow::LoginFlow;
use bs_core::services::security::SecurityCheckEngine;
use bs_core::services::session::SessionFlagStore;
use bs_infra::channel::ConsoleSmsChannel;
use bs_infra::navigation::RecordingNavigator;
use bs_infra::probes::SimulatedProbe;
use bs_infra::store::{BroadcastFlagStore, InMemoryFlagStore};
use bs_shared::config::{SecurityScanConfig, VerificationFlowConfig};

fn deterministic_scan_config() -> SecurityScanConfig {
    // keep the default latencies but pin every probe to a clean outcome
    let mut config = SecurityScanConfig::default();
    config.jailbreak.pass_rate = 1.0;
    config.malware.pass_rate = 1.0;
    config.integrity.pass_rate = 1.0;
    config
}

#[tokio::test(start_paused = true)]
async fn test_pipeline_with_infrastructure_collaborators() {
    let scan_config = deterministic_scan_config();
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

    let mut flag_changes = flag_store.subscribe();

    let mut flow = LoginFlow::new(
        engine,
        Arc::clone(&channel),
        Arc::clone(&flag_store),
        Arc::clone(&navigator),
        VerificationFlowConfig::default(),
    );

    flow.submit_phone("+919025740156").unwrap();
    assert_eq!(navigator.current(), Some(Route::SecurityCheck));

    let verdict = flow.run_security_check().await.unwrap();
    assert!(verdict.overall_passed);
    assert_eq!(navigator.current(), Some(Route::Verification));

    // the login write reaches subscribers without polling
    flag_changes.changed().await.unwrap();
    assert!(*flag_changes.borrow());

    flow.send_code().await.unwrap();
    assert_eq!(channel.message_count(), 1);

    flow.drive_countdown().await.unwrap();
    assert_eq!(navigator.current(), Some(Route::Home));

    flow.logout().await.unwrap();
    flag_changes.changed().await.unwrap();
    assert!(!*flag_changes.borrow());
    assert_eq!(navigator.current(), Some(Route::Login));

    assert_eq!(
        navigator.history(),
        vec![
            Route::Login,
            Route::SecurityCheck,
            Route::Verification,
            Route::Home,
            Route::Login
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_unavailable_channel_keeps_session_recoverable() {
    let scan_config = deterministic_scan_config();
    let engine = Arc::new(SecurityCheckEngine::new(
        SimulatedProbe::battery(&scan_config),
        scan_config,
    ));
    let channel = Arc::new(ConsoleSmsChannel::with_options(false, false));
    let flag_store = Arc::new(InMemoryFlagStore::new());
    let navigator = Arc::new(RecordingNavigator::default());

    let mut flow = LoginFlow::new(
        engine,
        channel,
        Arc::clone(&flag_store),
        Arc::clone(&navigator),
        VerificationFlowConfig::default(),
    );

    flow.run_security_check().await.unwrap();
    assert!(flow.send_code().await.is_err());

    // security clearance survives the channel failure; only dispatch is
    // blocked
    assert!(flag_store.get().await.unwrap());
    assert_eq!(navigator.current(), Some(Route::Verification));
}
