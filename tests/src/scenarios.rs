use std::io;
use std::net::IpAddr;
use std::time::Duration;

use pingr_common::config::ProbeConfig;
use pingr_common::error::ConfigError;
use pingr_common::network::target::expand;
use pingr_core::session::{self, NoopObserver};
use pingr_core::{AttemptOutcome, HostReport, ProbeError, Prober};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::doubles::{Behavior, ScriptedReachability, reply_ms};

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

fn prober(
    reachability: ScriptedReachability,
    count: u32,
    timeout_ms: u64,
) -> Prober<ScriptedReachability> {
    let cfg = ProbeConfig::new(count, timeout_ms).unwrap();
    Prober::new(reachability, cfg, CancellationToken::new())
}

#[tokio::test(start_paused = true)]
async fn range_target_probes_each_host_in_order() -> anyhow::Result<()> {
    let hosts = expand("192.168.1.100-192.168.1.102")?;
    let reachability = ScriptedReachability::new(reply_ms(4));
    let log = reachability.log();
    let prober = prober(reachability, 2, 2_000);

    let reports = session::run(&hosts, &prober, &mut NoopObserver).await?;

    assert_eq!(reports.len(), 3);
    for (report, expected) in reports.iter().zip(["192.168.1.100", "192.168.1.101", "192.168.1.102"]) {
        assert_eq!(report.addr(), Some(ip(expected)));
        assert_eq!(report.result().unwrap().sent(), 2);
    }
    assert_eq!(
        log.calls(),
        vec![
            ip("192.168.1.100"),
            ip("192.168.1.100"),
            ip("192.168.1.101"),
            ip("192.168.1.101"),
            ip("192.168.1.102"),
            ip("192.168.1.102"),
        ]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn unreachable_host_reports_only_timeouts() -> anyhow::Result<()> {
    let hosts = expand("203.0.113.1")?;
    let prober = prober(ScriptedReachability::new(Behavior::Silent), 3, 100);

    let reports = session::run(&hosts, &prober, &mut NoopObserver).await?;

    let result = reports[0].result().unwrap();
    assert_eq!(result.outcomes(), &[AttemptOutcome::Timeout; 3]);
    assert_eq!(result.sent(), 3);
    assert_eq!(result.received(), 0);
    assert_eq!(result.loss_percent(), 100);
    assert!(result.summary().is_none());
    assert!(!reports[0].responded());
    Ok(())
}

#[test]
fn zero_count_is_an_input_error() {
    assert_eq!(ProbeConfig::new(0, 2_000), Err(ConfigError::ZeroCount));
}

#[tokio::test(start_paused = true)]
async fn cancellation_during_pacing_stops_the_run() {
    let hosts = expand("10.9.8.1-3").unwrap();
    let reachability = ScriptedReachability::new(reply_ms(10));
    let log = reachability.log();
    let prober = prober(reachability, 4, 2_000);

    let cancel = prober.cancellation_token().clone();
    tokio::spawn(async move {
        // attempt 2 finishes at 520ms and its pacing runs until 1020ms
        sleep(Duration::from_millis(700)).await;
        cancel.cancel();
    });

    let interrupted = session::run(&hosts, &prober, &mut NoopObserver)
        .await
        .unwrap_err();

    assert_eq!(interrupted.host, "10.9.8.1");
    assert_eq!(interrupted.result.sent(), 2);
    assert_eq!(interrupted.result.outcomes().len(), 2);
    assert_eq!(log.calls(), vec![ip("10.9.8.1"), ip("10.9.8.1")]);
}

#[tokio::test(start_paused = true)]
async fn unknown_host_is_skipped() -> anyhow::Result<()> {
    let hosts = vec!["ghost.test".to_string(), "known.test".to_string()];
    let reachability = ScriptedReachability::new(reply_ms(3)).with_name("known.test", "10.0.0.7");
    let log = reachability.log();
    let prober = prober(reachability, 2, 500);

    let reports = session::run(&hosts, &prober, &mut NoopObserver).await?;

    assert!(matches!(
        reports[0],
        HostReport::Unresolved {
            error: ProbeError::Resolution { .. },
            ..
        }
    ));
    assert_eq!(reports[1].result().unwrap().received(), 2);
    assert_eq!(log.calls(), vec![ip("10.0.0.7"), ip("10.0.0.7")]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn io_error_keeps_partial_statistics() -> anyhow::Result<()> {
    let hosts = expand("10.1.1.1-2")?;
    let reachability = ScriptedReachability::new(reply_ms(5)).with_script(
        "10.1.1.1",
        &[
            reply_ms(7),
            Behavior::Silent,
            Behavior::Fail(io::ErrorKind::PermissionDenied),
        ],
    );
    let prober = prober(reachability, 4, 100);

    let reports = session::run(&hosts, &prober, &mut NoopObserver).await?;

    let HostReport::Aborted { result, error, .. } = &reports[0] else {
        panic!("expected the first host to abort, got {:?}", reports[0]);
    };
    assert!(matches!(error, ProbeError::Io { .. }));
    assert_eq!(result.sent(), 3);
    assert_eq!(result.received(), 1);
    assert_eq!(result.summary().unwrap().min_ms, 7);

    let second = reports[1].result().unwrap();
    assert_eq!(second.sent(), 4);
    assert_eq!(second.received(), 4);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn mixed_outcomes_compute_statistics() -> anyhow::Result<()> {
    let reachability = ScriptedReachability::new(Behavior::Silent).with_script(
        "10.2.2.2",
        &[reply_ms(20), Behavior::Silent, reply_ms(30), Behavior::Silent],
    );
    let prober = prober(reachability, 4, 100);

    let report = prober.probe("10.2.2.2", &mut NoopObserver).await?;

    let result = report.result().unwrap();
    assert!(result.received() <= result.sent());
    assert_eq!(result.loss_percent(), 50);
    let summary = result.summary().unwrap();
    assert_eq!((summary.min_ms, summary.max_ms), (20, 30));
    assert_eq!(summary.avg_rounded(), 25);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn slow_reply_beyond_timeout_is_a_timeout() -> anyhow::Result<()> {
    let reachability =
        ScriptedReachability::new(Behavior::Silent).with_script("10.3.3.3", &[reply_ms(250)]);
    let prober = prober(reachability, 1, 100);

    let report = prober.probe("10.3.3.3", &mut NoopObserver).await?;

    assert_eq!(
        report.result().unwrap().outcomes(),
        &[AttemptOutcome::Timeout]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn sent_always_matches_count_when_uninterrupted() -> anyhow::Result<()> {
    for count in [1u32, 2, 5, 9] {
        let prober = prober(ScriptedReachability::new(reply_ms(1)), count, 50);
        let report = prober.probe("10.4.4.4", &mut NoopObserver).await?;
        assert_eq!(report.result().unwrap().sent(), count);
    }
    Ok(())
}
