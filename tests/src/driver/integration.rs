#![cfg(unix)]
use std::time::{Duration, Instant};

use pulse_common::config::Config;
use pulse_common::tools::Tool;
use pulse_core::driver::{Driver, DriverState, RunSummary};
use pulse_core::resolver::SearchPath;
use pulse_core::runner::SystemRunner;
use pulse_core::shutdown::Shutdown;
use pulse_integration_tests::FakeTools;

const UDP_LINE: &str = "hping3 --udp -p 12345 -c 1 192.168.1.1";
const ARP_LINE: &str = "arping -c 1 -I eth0 192.168.1.1";

fn quick(iterations: u64) -> Config {
    Config {
        iterations: Some(iterations),
        interval: Duration::from_millis(50),
        ..Config::default()
    }
}

/// Runs against real child processes and checks the exact command lines the
/// tools received.
#[tokio::test]
async fn tools_receive_fixed_arguments_in_order() {
    let tools = FakeTools::new(&[("hping3", 0), ("arping", 0)]).unwrap();
    let mut driver = Driver::new(quick(2), SearchPath::new([tools.dir()]), SystemRunner::new(true));

    let summary = driver.run(Shutdown::never()).await.unwrap();

    assert_eq!(summary, RunSummary { iterations: 2, failures: 0, interrupted: false });
    assert_eq!(tools.calls().unwrap(), [UDP_LINE, ARP_LINE, UDP_LINE, ARP_LINE]);
}

#[tokio::test]
async fn missing_arping_prevents_any_invocation() {
    let tools = FakeTools::new(&[("hping3", 0)]).unwrap();
    let mut driver = Driver::new(quick(2), SearchPath::new([tools.dir()]), SystemRunner::new(true));

    let err = driver.run(Shutdown::never()).await.unwrap_err();

    assert_eq!(err.missing_tools(), &[Tool::ArpRequester]);
    assert!(err.to_string().contains("arping"));
    assert!(tools.calls().unwrap().is_empty());
    assert_eq!(driver.state(), DriverState::Terminated);
}

#[tokio::test]
async fn both_missing_tools_are_reported() {
    let tools = FakeTools::new(&[]).unwrap();
    let mut driver = Driver::new(quick(1), SearchPath::new([tools.dir()]), SystemRunner::new(true));

    let err = driver.run(Shutdown::never()).await.unwrap_err();

    assert_eq!(err.missing_tools(), &[Tool::UdpSender, Tool::ArpRequester]);
}

#[tokio::test]
async fn failing_tools_do_not_stop_the_loop() {
    let tools = FakeTools::new(&[("hping3", 1), ("arping", 2)]).unwrap();
    let mut driver = Driver::new(quick(3), SearchPath::new([tools.dir()]), SystemRunner::new(true));

    let summary = driver.run(Shutdown::never()).await.unwrap();

    assert_eq!(summary.iterations, 3);
    assert_eq!(summary.failures, 6);
    assert_eq!(tools.calls().unwrap().len(), 6);
}

#[tokio::test]
async fn default_interval_spaces_iterations_by_a_second() {
    let tools = FakeTools::new(&[("hping3", 0), ("arping", 0)]).unwrap();
    let cfg = Config { iterations: Some(2), ..Config::default() };
    let mut driver = Driver::new(cfg, SearchPath::new([tools.dir()]), SystemRunner::new(true));

    let started = Instant::now();
    driver.run(Shutdown::never()).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(tools.calls().unwrap().len(), 4);
}

#[tokio::test]
async fn interrupt_stops_an_unbounded_run() {
    let tools = FakeTools::new(&[("hping3", 0), ("arping", 0)]).unwrap();
    let cfg = Config { interval: Duration::from_millis(20), ..Config::default() };
    let mut driver = Driver::new(cfg, SearchPath::new([tools.dir()]), SystemRunner::new(true));
    let (trigger, shutdown) = Shutdown::channel();

    let stopper = async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        trigger.trigger();
    };
    let (summary, ()) = tokio::join!(driver.run(shutdown), stopper);
    let summary = summary.unwrap();

    assert!(summary.interrupted);
    assert!(summary.iterations >= 1);
    let calls = tools.calls().unwrap();
    assert_eq!(calls.len() as u64, summary.iterations * 2);
    assert!(calls.chunks(2).all(|pair| pair == [UDP_LINE, ARP_LINE]));
}
