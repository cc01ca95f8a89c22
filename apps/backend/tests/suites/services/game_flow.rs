//! Plays whole games through the state machine and persists the summary.

use dictation_backend::adapters::sessions_memory::MemorySessionStore;
use dictation_backend::domain::game::{GameMachine, Phase};
use dictation_backend::domain::words::WordBank;
use dictation_backend::domain::{badges, export};
use dictation_backend::services::{sessions, word_source};

fn play_to_completion(game: &mut GameMachine, answer_correctly: impl Fn(usize) -> bool) {
    for i in 0..10 {
        let word = game.round().expect("round in progress").word.to_string();
        if i % 3 == 0 {
            game.show_hint().unwrap();
        }
        let answer = if answer_correctly(i) { word.to_uppercase() } else { "nope".into() };
        game.set_answer(answer).unwrap();
        let verdict = game.submit_answer().unwrap();
        if !verdict.session_complete {
            game.load_next_word().unwrap();
        }
    }
}

#[tokio::test]
async fn uploaded_words_play_through_and_persist() {
    let bank = word_source::parse_upload("list.csv", b"apple,Banana\ncherry,42").unwrap();
    assert_eq!(bank.len(), 3);

    let mut game = GameMachine::new(Some(2024));
    game.load_word_bank(bank).unwrap();
    game.initialize_game().unwrap();
    play_to_completion(&mut game, |i| i % 2 == 0);

    assert_eq!(game.phase(), Phase::Complete);
    let summary = game.summary().cloned().expect("summary after ten rounds");
    assert_eq!(summary.total_score, 5);
    assert_eq!(summary.results.iter().filter(|r| r.hints_used).count(), 4);

    let store = MemorySessionStore::new();
    let stored = sessions::create_session(&store, summary.clone()).await.unwrap();
    let fetched = sessions::get_session(&store, stored.id).await.unwrap();
    assert_eq!(fetched.summary, summary);

    let csv = export::results_to_csv(&fetched.summary.results).unwrap();
    assert_eq!(csv.lines().count(), 11);

    let report = badges::report(&fetched.summary.results);
    assert_eq!(report.accuracy, 50);
    assert_eq!(report.badges, vec![badges::KEEP_TRYING]);
}

#[tokio::test]
async fn reset_starts_a_fresh_play_through() {
    let mut game = GameMachine::new(Some(11));
    game.load_word_bank(WordBank::from_text("sun, moon, star").unwrap())
        .unwrap();
    game.initialize_game().unwrap();
    play_to_completion(&mut game, |_| true);
    assert_eq!(game.score(), 10);

    game.reset_game();
    assert!(game.word_bank().is_none());
    assert!(game.initialize_game().is_err());

    game.load_word_bank(WordBank::from_text("comet").unwrap())
        .unwrap();
    game.initialize_game().unwrap();
    assert!(game.game_words().iter().all(|w| w.as_str() == "comet"));
    assert_eq!(game.phase(), Phase::InRound { index: 0 });
    assert_eq!(game.score(), 0);
    assert!(game.results().is_empty());
    assert!(game.summary().is_none());
}
