// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use emergency_care_simulator::*;

// Building blocks
mod distribution_tests;

// Configuration and command line
mod cli_argument_parsing_tests;


#[test]
fn test_core_id_types() {
    let mut ids = IdGenerator::new();
    let patient = ids.patient();
    let worker = ids.worker();
    let event = ids.event();

    // One shared sequence, starting at 1
    assert_eq!(patient, PatientId(1));
    assert_eq!(worker, WorkerId(2));
    assert_eq!(event, EventId(3));
    assert_eq!(ids.issued(), 3);

    assert_eq!(patient.to_string(), "1");
    assert_eq!(event.to_string(), "3");
}

#[test]
fn test_enum_display_names() {
    let names: Vec<String> = Priority::ALL.iter().map(|p| p.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "NON_URGENT",
            "LESS_URGENT",
            "URGENT",
            "VERY_URGENT",
            "EMERGENCY"
        ]
    );

    let queues: Vec<&str> = Stage::ALL.iter().map(|s| s.queue_name()).collect();
    assert_eq!(
        queues,
        vec![
            "register_queue",
            "screening_queue",
            "consultation_queue",
            "exams_queue"
        ]
    );

    assert_eq!(Stage::Screening.worker_kind(), WorkerKind::Nurse);
    assert_eq!(Stage::Exams.worker_kind(), WorkerKind::Nurse);
    assert_eq!(Stage::Consultation.worker_kind(), WorkerKind::Doctor);
    assert_eq!(Stage::Registration.worker_kind(), WorkerKind::Attendant);
}

#[test]
fn test_patient_and_worker_display() {
    let patient = Patient::new(PatientId(3), Priority::NonUrgent, true);
    assert_eq!(patient.to_string(), "Patient(3, NON_URGENT, exams)");

    let patient = Patient::new(PatientId(4), Priority::Emergency, false);
    assert_eq!(patient.to_string(), "Patient(4, EMERGENCY)");

    let worker = Worker::new(WorkerId(4), WorkerKind::Nurse);
    assert_eq!(worker.to_string(), "Nurse(4)");
}

#[test]
fn test_configuration_serialization() {
    let config = SimulationConfig {
        seed: Some(11),
        queue_discipline: QueueDiscipline::Lifo,
        queue_weights: [0.125, 0.125, 0.25, 0.25, 0.25],
        ..Default::default()
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"EXP\""));
    assert!(json.contains("\"LIFO\""));

    let parsed: SimulationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_patient_serialization() {
    let mut patient = Patient::new(PatientId(9), Priority::Urgent, false);
    patient.set_current_event(Some(EventId(12)));

    let json = serde_json::to_string(&patient).unwrap();
    let parsed: Patient = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, patient);
    assert_eq!(parsed.current_event(), Some(EventId(12)));
}
