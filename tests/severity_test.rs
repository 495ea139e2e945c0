use logfan::sink::SinkConfig;
use logfan::{ModuleRef, Part, Record, Severity};
use serial_test::serial;

const ALL: [Severity; 5] = [
    Severity::Debug,
    Severity::Info,
    Severity::Warn,
    Severity::Error,
    Severity::Fatal,
];

fn record(severity: Severity) -> Record {
    Record::new(severity, ModuleRef::new("Net"), vec![Part::from("msg")])
}

#[test]
#[serial]
fn test_threshold_acceptance_over_all_severity_pairs() {
    for threshold in ALL {
        let config = SinkConfig::new().threshold(threshold);
        for severity in ALL {
            let accepted = config.accepts(&record(severity));
            let expected = severity.rank() <= threshold.rank();
            assert_eq!(
                accepted, expected,
                "threshold {threshold} vs record {severity}"
            );
        }
    }
}

#[test]
#[serial]
fn test_error_class_is_rank_based() {
    assert!(record(Severity::Warn).is_error_class());
    assert!(record(Severity::Error).is_error_class());
    assert!(record(Severity::Fatal).is_error_class());
    assert!(!record(Severity::Info).is_error_class());
    assert!(!record(Severity::Debug).is_error_class());
}

#[test]
#[serial]
fn test_default_severity_follows_debug_flag() {
    unsafe { std::env::set_var("DEBUG", "1") };
    assert_eq!(Severity::default_from_env(), Severity::Debug);

    unsafe { std::env::set_var("DEBUG", "true") };
    assert_eq!(Severity::default_from_env(), Severity::Debug);

    unsafe { std::env::set_var("DEBUG", "0") };
    assert_eq!(Severity::default_from_env(), Severity::Warn);

    unsafe { std::env::remove_var("DEBUG") };
    assert_eq!(Severity::default_from_env(), Severity::Warn);
}
