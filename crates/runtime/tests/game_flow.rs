use game_content::ContentFactory;
use game_core::{
    Controller, ExecuteError, GamePhase, Half, InitializationError, LogEntryKind, Side,
};
use runtime::{
    ChannelTurnProvider, Event, GameEvent, NewGame, OracleManager, PlayEvent, Runtime,
    RuntimeError, Topic, TurnDecision,
};
use tokio::sync::broadcast::error::TryRecvError;

const HOME: &str = "team-ironclad";
const AWAY: &str = "team-gravel";

fn oracles() -> OracleManager {
    let factory = ContentFactory::bundled();
    let league = factory.load_league().expect("bundled league loads");
    let config = factory.load_config().expect("bundled config loads");
    OracleManager::from_league(&league, config).expect("bundled league validates")
}

fn runtime() -> Runtime {
    Runtime::builder()
        .oracles(oracles())
        .build()
        .expect("runtime builds")
}

#[tokio::test]
async fn automated_game_runs_to_completion() {
    let mut runtime = runtime();
    let mut game_events = runtime.subscribe(Topic::Game);

    let game_id = runtime
        .create_game(NewGame::new(HOME, AWAY).seed(42))
        .await
        .unwrap();
    let state = runtime.run_to_completion(&game_id).await.unwrap();

    assert_eq!(state.phase, GamePhase::Complete);
    assert!(state.inning >= 9);
    let winner = state.winner().expect("completed games are decided");
    assert!(state.runs(winner) > state.runs(winner.opponent()));

    let log = runtime.game_log(&game_id).unwrap();
    let last = log.last().unwrap();
    assert_eq!(last.kind, LogEntryKind::Info);
    assert_eq!(last.text, "Game over.");
    assert!(log.iter().any(|entry| entry.text == "--- Bottom of the 1st ---"));
    assert!(log.iter().any(|entry| entry.text == "--- Top of the 2nd ---"));

    let mut created = false;
    let mut completed = None;
    loop {
        match game_events.try_recv() {
            Ok(Event::Game(GameEvent::Created { game_id: id, .. })) => {
                assert_eq!(id, game_id);
                created = true;
            }
            Ok(Event::Game(GameEvent::Completed {
                final_score,
                winner: event_winner,
                ..
            })) => completed = Some((final_score, event_winner)),
            Ok(_) => {}
            Err(TryRecvError::Empty) => break,
            Err(other) => panic!("unexpected receive error: {other:?}"),
        }
    }
    assert!(created);
    let (final_score, event_winner) = completed.expect("completion event published");
    assert_eq!(final_score.home, state.runs(Side::Home));
    assert_eq!(final_score.away, state.runs(Side::Away));
    assert_eq!(event_winner, Some(winner));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn completed_game_rejects_further_at_bats() {
    let mut runtime = runtime();
    let game_id = runtime
        .create_game(NewGame::new(HOME, AWAY).seed(3))
        .await
        .unwrap();
    let final_state = runtime.run_to_completion(&game_id).await.unwrap();

    let mut plays = runtime.subscribe(Topic::Play);
    let handle = runtime.handle(&game_id).unwrap();
    let err = handle.play_at_bat().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Execute(ExecuteError::GameNotActive)
    ));
    assert!(err.is_game_over());

    match plays.recv().await.unwrap() {
        Event::Play(PlayEvent::AtBatRejected { code, nonce, .. }) => {
            assert_eq!(code, "EXECUTE_GAME_NOT_ACTIVE");
            assert_eq!(nonce, final_state.nonce);
        }
        other => panic!("unexpected event {other:?}"),
    }

    assert_eq!(handle.query_state().await.unwrap(), final_state);
    assert!(runtime.step(&game_id).await.unwrap_err().is_game_over());
}

#[tokio::test]
async fn same_seed_replays_the_same_game() {
    let mut runtime = runtime();
    let first = runtime
        .create_game(NewGame::new(HOME, AWAY).seed(7))
        .await
        .unwrap();
    let second = runtime
        .create_game(NewGame::new(HOME, AWAY).seed(7))
        .await
        .unwrap();
    assert_ne!(first, second);

    let a = runtime.run_to_completion(&first).await.unwrap();
    let b = runtime.run_to_completion(&second).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(
        runtime.game_log(&first).unwrap(),
        runtime.game_log(&second).unwrap()
    );
}

#[tokio::test]
async fn games_progress_independently() {
    let mut runtime = runtime();
    let mut ids = Vec::new();
    for (home, away, seed) in [
        ("team-ironclad", "team-gravel", 1),
        ("team-blueridge", "team-portside", 2),
        ("team-gravel", "team-blueridge", 3),
    ] {
        ids.push(
            runtime
                .create_game(NewGame::new(home, away).seed(seed))
                .await
                .unwrap(),
        );
    }

    let (a, b, c) = tokio::join!(
        runtime.run_to_completion(&ids[0]),
        runtime.run_to_completion(&ids[1]),
        runtime.run_to_completion(&ids[2]),
    );
    for state in [a.unwrap(), b.unwrap(), c.unwrap()] {
        assert_eq!(state.phase, GamePhase::Complete);
    }
    assert_eq!(runtime.open_games().len(), 3);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn human_side_waits_for_decisions() {
    let (provider, decisions) = ChannelTurnProvider::new(4);
    let mut runtime = Runtime::builder()
        .oracles(oracles())
        .human_provider(provider)
        .build()
        .unwrap();
    let game_id = runtime
        .create_game(NewGame::new(HOME, AWAY).human(Side::Home).seed(11))
        .await
        .unwrap();

    // The visitors bat first and are automated.
    let reports = runtime.play_until_human(&game_id).await.unwrap();
    assert!(reports.len() >= 3);
    assert!(reports.iter().all(|report| report.preview.half == Half::Top));
    assert!(reports.iter().all(|report| report.preview.controller == Controller::Cpu));

    let handle = runtime.handle(&game_id).unwrap();
    let preview = handle.prepare_at_bat().await.unwrap();
    assert_eq!((preview.inning, preview.half), (1, Half::Bottom));
    assert_eq!(preview.controller, Controller::Human);

    // Nothing more is played automatically while the human is up.
    assert!(runtime.play_until_human(&game_id).await.unwrap().is_empty());

    decisions.send(TurnDecision::Roll).await.unwrap();
    let report = runtime.step(&game_id).await.unwrap().unwrap();
    assert_eq!(report.preview.nonce, preview.nonce);
    assert_eq!(report.preview.batting_side, Side::Home);

    let before = handle.query_state().await.unwrap();
    decisions.send(TurnDecision::Pause).await.unwrap();
    assert!(runtime.step(&game_id).await.unwrap().is_none());
    assert_eq!(handle.query_state().await.unwrap(), before);

    drop(decisions);
    if handle.query_state().await.unwrap().controller_at_bat() == Controller::Human {
        assert!(matches!(
            runtime.step(&game_id).await,
            Err(RuntimeError::TurnProviderChannelClosed)
        ));
    }
}

#[tokio::test]
async fn human_game_without_provider_is_refused() {
    let mut runtime = runtime();
    let game_id = runtime
        .create_game(NewGame::new(HOME, AWAY).human(Side::Away))
        .await
        .unwrap();
    assert!(matches!(
        runtime.step(&game_id).await,
        Err(RuntimeError::ProviderNotSet {
            controller: Controller::Human
        })
    ));
    let state = runtime.handle(&game_id).unwrap().query_state().await.unwrap();
    assert_eq!(state.nonce, 0);
}

#[tokio::test]
async fn stale_prepared_at_bat_is_not_played() {
    let mut runtime = runtime();
    let game_id = runtime
        .create_game(NewGame::new(HOME, AWAY).seed(5))
        .await
        .unwrap();
    let handle = runtime.handle(&game_id).unwrap();

    let preview = handle.prepare_at_bat().await.unwrap();
    handle.play_at_bat().await.unwrap();

    match handle.play_prepared(&preview).await {
        Err(RuntimeError::StaleAtBat { prepared, current }) => {
            assert_eq!(prepared, 0);
            assert_eq!(current, 1);
        }
        other => panic!("expected stale at-bat, got {other:?}"),
    }
    assert_eq!(handle.query_state().await.unwrap().nonce, 1);
}

#[tokio::test]
async fn invalid_matchups_are_rejected() {
    let mut runtime = runtime();

    let err = runtime
        .create_game(NewGame::new(HOME, HOME))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::InitialState(InitializationError::SameTeam { .. })
    ));

    let err = runtime
        .create_game(NewGame::new(HOME, "team-nobody"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::InitialState(InitializationError::EmptyLineup { .. })
    ));
    assert!(runtime.stored_games().unwrap().is_empty());
}

#[test]
fn runtime_requires_oracles() {
    assert!(matches!(
        Runtime::builder().build(),
        Err(RuntimeError::MissingOracles)
    ));
}
