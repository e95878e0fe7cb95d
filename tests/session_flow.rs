use chrono::NaiveDate;
use std::path::Path;
use wordle_game::clipboard::MemoryClipboard;
use wordle_game::commands::{reset, stored_records, stored_share_text};
use wordle_game::controller::{GameController, StartOptions};
use wordle_game::game::{GameMode, RoundStatus, Rules};
use wordle_game::i18n::Language;
use wordle_game::storage::FileStorage;
use wordle_game::wordlists::EmbeddedWords;

type Controller = GameController<FileStorage, MemoryClipboard, EmbeddedWords>;

fn words() -> EmbeddedWords {
    EmbeddedWords::try_from_lists(&["crane", "slate", "pious"], &["termo", "nobre"]).unwrap()
}

fn start(dir: &Path, mode: GameMode, rules: Rules, today: NaiveDate) -> Controller {
    GameController::start(
        FileStorage::new(dir),
        MemoryClipboard::default(),
        words(),
        rules,
        StartOptions {
            mode,
            language: Some(Language::En),
            today,
        },
    )
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[test]
fn won_round_survives_restart_and_counts_once() {
    let dir = tempfile::tempdir().unwrap();

    let mut controller = start(dir.path(), GameMode::Practice, Rules::default(), day(19));
    let solution = controller.session().round.solution().text().to_string();
    let miss = ["crane", "slate", "pious"]
        .into_iter()
        .find(|w| !w.eq_ignore_ascii_case(&solution))
        .unwrap();

    controller.submit_word(miss);
    controller.submit_word(&solution);
    assert_eq!(controller.session().round.status(), RoundStatus::Won);
    assert_eq!(controller.session().stats.games_played, 1);
    assert_eq!(controller.session().stats.guess_distribution[1], 1);

    let shared = controller.share().unwrap();
    assert!(shared.starts_with("WordMint Random 2/6\n"));
    assert_eq!(controller.clipboard().contents.as_deref(), Some(shared.as_str()));
    drop(controller);

    let restarted = start(dir.path(), GameMode::Practice, Rules::default(), day(19));
    assert_eq!(restarted.session().round.status(), RoundStatus::Won);
    assert_eq!(restarted.session().round.solution().text(), solution);
    assert_eq!(restarted.session().stats.games_played, 1);
    assert_eq!(restarted.session().stats.games_won, 1);
    drop(restarted);

    let storage = FileStorage::new(dir.path());
    assert_eq!(
        stored_share_text(&storage, &Rules::default()).as_deref(),
        Some(shared.as_str())
    );
}

#[test]
fn daily_round_resumes_same_day_only() {
    let dir = tempfile::tempdir().unwrap();
    let rules = Rules::new(1, None);

    let mut controller = start(dir.path(), GameMode::Daily, rules, day(19));
    let solution = controller.session().round.solution().text().to_string();
    let miss = ["crane", "slate", "pious"]
        .into_iter()
        .find(|w| !w.eq_ignore_ascii_case(&solution))
        .unwrap();
    controller.submit_word(miss);
    assert_eq!(controller.session().round.status(), RoundStatus::Lost);
    assert_eq!(controller.session().round.date_key(), "2026-10-19");
    drop(controller);

    let same_day = start(dir.path(), GameMode::Daily, rules, day(19));
    assert_eq!(same_day.session().round.status(), RoundStatus::Lost);
    assert_eq!(same_day.session().stats.games_played, 1);
    assert_eq!(same_day.session().stats.current_streak, 0);
    drop(same_day);

    let next_day = start(dir.path(), GameMode::Daily, rules, day(20));
    assert_eq!(next_day.session().round.status(), RoundStatus::Playing);
    assert_eq!(next_day.session().round.date_key(), "2026-10-20");
    assert_eq!(next_day.session().stats.games_played, 1);
}

#[test]
fn reset_clears_round_then_everything() {
    let dir = tempfile::tempdir().unwrap();

    let mut controller = start(dir.path(), GameMode::Practice, Rules::default(), day(19));
    let solution = controller.session().round.solution().text().to_string();
    controller.submit_word(&solution);
    drop(controller);

    let mut storage = FileStorage::new(dir.path());
    reset(&mut storage, false).unwrap();
    assert_eq!(stored_share_text(&storage, &Rules::default()), None);
    let (settings, stats) = stored_records(&storage);
    assert_eq!(settings.language, Language::En);
    assert_eq!(stats.games_won, 1);

    reset(&mut storage, true).unwrap();
    let (settings, stats) = stored_records(&storage);
    assert_eq!(settings.language, Language::default());
    assert_eq!(stats.games_played, 0);
}
