use rand::{rngs::SmallRng, SeedableRng};
use twenty48::autoplay::{play_out, Policy};
use twenty48::session::{autoplay, GameApi, SharedSession};
use twenty48::{
    Board, Direction, FirstEmptySpawner, GameConfig, GameEngine, GameError, GameState, GameStatus,
    RandomSpawner,
};

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_moves_are_serialized() -> anyhow::Result<()> {
    let engine = GameEngine::new(GameConfig::default(), RandomSpawner::seeded(21))?;
    let session = SharedSession::new(engine);

    let mut handles = Vec::new();
    for worker in 0..4 {
        let session = session.clone();
        handles.push(tokio::spawn(async move {
            let mut gained = 0;
            let mut changed = 0;
            for i in 0..50 {
                let dir = Direction::ALL[(worker + i) % 4];
                match session.make_move(dir).await {
                    Ok(report) => {
                        gained += report.score_gained;
                        changed += usize::from(report.changed);
                    }
                    // Won or GameOver freezes the board for everyone
                    Err(_) => break,
                }
            }
            (gained, changed)
        }));
    }

    let mut total_gained = 0;
    let mut total_changed = 0;
    for handle in handles {
        let (gained, changed) = handle.await?;
        total_gained += gained;
        total_changed += changed;
    }

    let state = session.snapshot().await;
    assert_eq!(state.score, total_gained);
    assert_eq!(session.moves_made().await, total_changed);
    // two opening tiles plus one per effective move, minus what merged away
    assert!(state.board.total() as usize >= 2 * (2 + total_changed));
    Ok(())
}

#[tokio::test]
async fn test_rejected_transition_downcasts_to_game_error() -> anyhow::Result<()> {
    let board = Board::from_rows(&[[2u64, 4], [8, 16]])?;
    let mut state = GameState::from_board(board, 2048)?;
    state.status = GameStatus::GameOver;
    let session = SharedSession::new(GameEngine::from_state(state.clone(), FirstEmptySpawner)?);

    let err = session.make_move(Direction::Left).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GameError>(),
        Some(GameError::InvalidStateTransition {
            status: GameStatus::GameOver,
            ..
        })
    ));
    assert!(session.continue_after_win().await.is_err());
    assert_eq!(session.snapshot().await, state);

    session.reset().await?;
    assert_eq!(session.status().await, GameStatus::Playing);
    assert_eq!(session.snapshot().await.board.empty_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_autoplay_runs_to_completion() -> anyhow::Result<()> {
    let engine = GameEngine::new(GameConfig::new(3, 64), RandomSpawner::seeded(8))?;
    let session = SharedSession::new(engine);
    let mut rng = SmallRng::seed_from_u64(9);

    let report = autoplay(&session, Policy::Random, &mut rng, 10_000).await?;
    assert_eq!(report.status, GameStatus::GameOver);
    assert_eq!(report.score, session.snapshot().await.score);
    assert_eq!(report.moves, session.moves_made().await);
    assert!(report.max_tile >= 4);
    Ok(())
}

#[tokio::test]
async fn test_autoplay_stops_at_move_limit() -> anyhow::Result<()> {
    let engine = GameEngine::new(GameConfig::default(), RandomSpawner::seeded(1))?;
    let session = SharedSession::new(engine);
    let mut rng = SmallRng::seed_from_u64(2);

    let report = autoplay(&session, Policy::Corner, &mut rng, 5).await?;
    assert_eq!(report.moves, 5);
    assert_eq!(report.status, GameStatus::Playing);
    Ok(())
}

#[test]
fn test_play_out_marks_stuck_board_game_over() {
    let board = Board::from_rows(&[[2u64, 4], [4, 2]]).unwrap();
    let state = GameState::from_board(board, 2048).unwrap();
    let mut engine = GameEngine::from_state(state, FirstEmptySpawner).unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    let report = play_out(&mut engine, Policy::Corner, &mut rng, 10);
    assert_eq!(report.status, GameStatus::GameOver);
    assert_eq!(report.moves, 0);
    assert_eq!(engine.status(), GameStatus::GameOver);
}

#[test]
fn test_init_logging_can_run_twice() {
    twenty48::init_logging();
    twenty48::init_logging();
    log::info!("logger installed");
}
