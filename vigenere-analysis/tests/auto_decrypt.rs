//! End-to-end cryptanalysis scenarios

use vigenere_analysis::alphabet::{Key, NormalizedText};
use vigenere_analysis::analysis::{friedman_test, kasiski_examination, CandidateSource};
use vigenere_analysis::{
    decrypt, encrypt, encrypt_str, AnalysisConfig, DecryptionCandidate, EnglishFitness, Solver,
    VigenereError, ENGLISH,
};

const SAMPLE: &str = "It was a bright cold day in the early spring, and the old harbour town was \
    waking slowly to the sound of gulls and the creak of moored boats. The fishermen \
    had gone out before dawn, leaving their wives to mend the nets and sell the \
    small catch of the previous evening at the market by the church. Children ran \
    along the stone wall that kept the sea from the houses, shouting at one another \
    and daring each other to climb down to the wet rocks below. Nobody in the town \
    remembered a time when things had been very different, and most of the people \
    there were content to believe that nothing would ever change. Yet on that \
    particular morning a stranger arrived on the first coach from the city, carrying \
    a leather case and a letter addressed to the mayor, and within a week the whole \
    town was talking of nothing else but the plans he had brought with him for the \
    building of a new railway along the coast.";

fn solver() -> Solver {
    Solver::new(AnalysisConfig::default()).unwrap()
}

#[test]
fn test_lemon_vector() {
    let key = Key::parse("LEMON").unwrap();
    let ciphertext = encrypt(&NormalizedText::normalize("ATTACKATDAWN"), &key);
    assert_eq!(ciphertext.to_string(), "LXFOPVEFRNHR");
    assert_eq!(decrypt(&ciphertext, &key).to_string(), "ATTACKATDAWN");
}

#[test]
fn test_english_fitness_cracks_sample() {
    let ciphertext = encrypt_str(SAMPLE, "LAMP").unwrap();

    let candidate = solver()
        .solve(&ciphertext, &mut EnglishFitness::default())
        .unwrap();

    assert_eq!(candidate.key.to_string(), "LAMP");
    assert_eq!(candidate.key_length.source, CandidateSource::Kasiski);
    assert_eq!(candidate.plaintext, NormalizedText::normalize(SAMPLE));
}

#[test]
fn test_fitness_separates_right_and_wrong_key_lengths() {
    let ciphertext = NormalizedText::normalize(&encrypt_str(SAMPLE, "LAMP").unwrap());
    let fitness = EnglishFitness::default();

    let scores: Vec<(usize, f64)> = solver()
        .candidates(&ciphertext)
        .unwrap()
        .map(|c| (c.key_length.length, fitness.score(&c.plaintext)))
        .collect();

    for (length, score) in scores {
        match length {
            4 => assert!(score <= fitness.max_chi_squared, "length 4 scored {score}"),
            2 => assert!(score > fitness.max_chi_squared, "length 2 scored {score}"),
            _ => {}
        }
    }
}

#[test]
fn test_human_validator_sees_every_candidate_before_failing() {
    let ciphertext = encrypt_str(SAMPLE, "CODE").unwrap();
    let mut keys = Vec::new();
    let mut reject_all = |candidate: &DecryptionCandidate| {
        keys.push(candidate.key.to_string());
        false
    };

    let err = solver().solve(&ciphertext, &mut reject_all).unwrap_err();
    match err {
        VigenereError::NoCandidateAccepted { tried } => assert_eq!(tried, keys.len()),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(keys.contains(&"CODE".to_string()));
}

#[test]
fn test_friedman_fallback_reports_inconclusive() {
    let ciphertext = NormalizedText::normalize("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    assert!(kasiski_examination(&ciphertext, &AnalysisConfig::default()).is_empty());
    assert!(friedman_test(&ciphertext, &ENGLISH) <= 1);

    let result = solver().solve("abcdefghijklmnopqrstuvwxyz", &mut |_: &DecryptionCandidate| true);
    assert_eq!(result, Err(VigenereError::AnalysisInconclusive));
}

#[test]
fn test_empty_input_reported() {
    let result = solver().solve("  ...  ", &mut |_: &DecryptionCandidate| true);
    assert_eq!(result, Err(VigenereError::EmptyInput));
}

#[test]
fn test_solver_is_deterministic() {
    let ciphertext = NormalizedText::normalize(&encrypt_str(SAMPLE, "WIND").unwrap());
    let solver = solver();
    let first: Vec<DecryptionCandidate> = solver.candidates(&ciphertext).unwrap().collect();
    let second: Vec<DecryptionCandidate> = solver.candidates(&ciphertext).unwrap().collect();
    assert_eq!(first, second);
}
