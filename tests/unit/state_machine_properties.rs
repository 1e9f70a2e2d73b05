//! Property checks over generated operation sequences.
//!
//! Each run drives the contract and a plain in-memory model with the same
//! operations, then compares outcomes and re-checks plan invariants after
//! every step.
use std::collections::HashMap;

use soroban_sdk::Env;
use treatment_plan_tests::{assert_plan_invariants, assert_success};
use treatment_plan_tests::utils::{TreatmentFixture, UserFixture};
use treatment_plans::Error;

const DOCTORS: usize = 2;
const PATIENTS: usize = 3;
const STEPS: usize = 60;

/// Small deterministic generator so failures reproduce from the seed alone.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[derive(Clone, Default)]
struct ModelPlan {
    consent: bool,
    completed: bool,
    medications: u32,
    description: String,
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Create,
    Consent,
    Update,
    Complete,
    AddMedication,
}

const OPS: [Op; 5] = [
    Op::Create,
    Op::Consent,
    Op::Update,
    Op::Complete,
    Op::AddMedication,
];

fn expected(
    model: &HashMap<(usize, usize), ModelPlan>,
    key: (usize, usize),
    op: Op,
) -> Result<(), Error> {
    let plan = model.get(&key);
    match (op, plan) {
        (Op::Create, Some(_)) => Err(Error::TreatmentAlreadyExists),
        (Op::Create, None) => Ok(()),
        (_, None) => Err(Error::TreatmentNotFound),
        (Op::Consent, Some(_)) => Ok(()),
        (_, Some(p)) if !p.consent => Err(Error::ConsentRequired),
        (_, Some(p)) if p.completed => Err(Error::AlreadyCompleted),
        _ => Ok(()),
    }
}

fn apply(
    fx: &TreatmentFixture,
    doctor: &UserFixture,
    patient: &UserFixture,
    op: Op,
    step: usize,
) -> Result<(), Error> {
    let d = &doctor.address;
    let p = &patient.address;
    let outcome = match op {
        Op::Create => fx
            .client
            .try_create_treatment_plan(d, p, &fx.text(&format!("plan-{}", step))),
        Op::Consent => fx.client.try_provide_consent(p, d),
        Op::Update => fx
            .client
            .try_update_treatment(d, p, &fx.text(&format!("rev-{}", step))),
        Op::Complete => fx.client.try_complete_treatment(d, p),
        Op::AddMedication => fx.client.try_add_medication(
            d,
            p,
            &fx.text("Cetirizine"),
            &fx.text("10mg"),
            &fx.text("daily"),
            &((step % 4) as u32),
        ),
    };
    match outcome {
        Ok(_) => Ok(()),
        Err(Ok(error)) => Err(error),
        Err(Err(invoke)) => panic!("host error on {:?}: {:?}", op, invoke),
    }
}

fn run_sequence(seed: u64) {
    let env = Env::default();
    env.budget().reset_unlimited();
    let fx = TreatmentFixture::new(&env);
    let doctors: Vec<UserFixture> = (0..DOCTORS)
        .map(|i| fx.doctor(&format!("Dr. {}", i)))
        .collect();
    let patients: Vec<UserFixture> = (0..PATIENTS)
        .map(|i| fx.patient(&format!("P{}", i)))
        .collect();

    let mut rng = Lcg(seed);
    let mut model: HashMap<(usize, usize), ModelPlan> = HashMap::new();

    for step in 0..STEPS {
        let key = (rng.next(DOCTORS), rng.next(PATIENTS));
        let op = OPS[rng.next(OPS.len())];
        fx.advance(rng.next(3) as u64);

        let doctor = &doctors[key.0].address;
        let patient = &patients[key.1].address;
        let before = model
            .contains_key(&key)
            .then(|| fx.client.get_treatment_plan(doctor, patient));

        let want = expected(&model, key, op);
        let got = apply(&fx, &doctors[key.0], &patients[key.1], op, step);
        assert_eq!(got, want, "seed {} step {} op {:?}", seed, step, op);

        if got.is_err() {
            // Failed operations leave the record untouched.
            if let Some(before) = before {
                let after = fx.client.get_treatment_plan(doctor, patient);
                assert_eq!(after, before, "seed {} step {}", seed, step);
            }
            continue;
        }

        let entry = model.entry(key).or_default();
        match op {
            Op::Create => entry.description = format!("plan-{}", step),
            Op::Consent => entry.consent = true,
            Op::Update => entry.description = format!("rev-{}", step),
            Op::Complete => entry.completed = true,
            Op::AddMedication => entry.medications += 1,
        }

        let plan = fx.client.get_treatment_plan(doctor, patient);
        assert_plan_invariants!(plan);
        assert_eq!(plan.doctor, *doctor);
        assert_eq!(plan.patient, *patient);
        assert_eq!(plan.patient_consent, entry.consent);
        assert_eq!(plan.is_completed, entry.completed);
        assert_eq!(plan.medications.len(), entry.medications);
        assert_eq!(plan.description, fx.text(&entry.description));
        assert_eq!(plan.last_updated, fx.now());

        // Only the operation's own fields and last_updated move.
        match before {
            Some(before) => {
                assert_eq!(plan.created_at, before.created_at, "seed {} step {}", seed, step);
                for i in 0..before.medications.len() {
                    assert_eq!(
                        plan.medications.get(i),
                        before.medications.get(i),
                        "seed {} step {} medication {}",
                        seed,
                        step,
                        i
                    );
                }
            }
            None => assert_eq!(plan.created_at, fx.now()),
        }
    }

    // Both indexes agree with the set of created pairs.
    for (d, doctor) in doctors.iter().enumerate() {
        let expected_count = model.keys().filter(|(kd, _)| *kd == d).count() as u32;
        assert_eq!(
            fx.client.get_doctor_patients(&doctor.address).len(),
            expected_count
        );
    }
    for (p, patient) in patients.iter().enumerate() {
        let expected_count = model.keys().filter(|(_, kp)| *kp == p).count() as u32;
        assert_eq!(
            fx.client.get_patient_doctors(&patient.address).len(),
            expected_count
        );
    }
}

#[test]
fn prop_operations_match_model() {
    for seed in [1u64, 7, 42, 1_337, 90_210] {
        run_sequence(seed);
    }
}

#[test]
fn prop_completion_is_monotonic() {
    let env = Env::default();
    let fx = TreatmentFixture::new(&env);
    let doctor = fx.doctor("Dr. Mwangi");
    let patient = fx.patient("Wanjiru");
    fx.consented_plan(&doctor, &patient, "Course");
    fx.client
        .complete_treatment(&doctor.address, &patient.address);

    for _ in 0..5 {
        fx.advance(1);
        let _ = fx.client.try_complete_treatment(&doctor.address, &patient.address);
        let _ = fx
            .client
            .try_update_treatment(&doctor.address, &patient.address, &fx.text("again"));
        assert_success!(fx.client.try_provide_consent(&patient.address, &doctor.address));
        let (_, _, is_completed, _) = fx
            .client
            .get_treatment_details(&doctor.address, &patient.address);
        assert!(is_completed);
    }
}
