use covo_bot::game::{ContentBank, GameError, OperatorList, PromptKind, TruthOrDare};
use std::sync::{Arc, Barrier};
use std::thread;
use teloxide::types::{ChatId, UserId};

const OPERATOR: u64 = 900;

fn shared_game() -> Arc<TruthOrDare> {
    let content = ContentBank::new(["dance"], ["secret?"]);
    Arc::new(TruthOrDare::new(
        Arc::new(content),
        Arc::new(OperatorList::new([OPERATOR])),
    ))
}

/// Runs `f` on `n` threads released at the same instant
fn race<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(usize) -> T + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(n));
    let f = Arc::new(f);
    let handles: Vec<_> = (0..n)
        .map(|i| {
            let barrier = barrier.clone();
            let f = f.clone();
            thread::spawn(move || {
                barrier.wait();
                f(i)
            })
        })
        .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn test_double_confirm_advances_once() {
    let chat = ChatId(100);
    for _ in 0..50 {
        let game = shared_game();
        game.start(chat, UserId(1)).unwrap();
        game.join(chat, UserId(2), "@two").unwrap();
        game.join(chat, UserId(3), "@three").unwrap();
        game.close_registration(chat, UserId(1)).unwrap();

        let g = game.clone();
        let results = race(2, move |_| g.confirm_answered(chat, UserId(2)));

        let ok = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(ok, 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(GameError::NotYourTurn))));

        let room = game.room(chat).unwrap();
        assert_eq!(room.turn().map(|t| t.index()), Some(1));
        assert_eq!(room.active_user(), Some(UserId(3)));
    }
}

#[test]
fn test_concurrent_joins_are_all_recorded() {
    let chat = ChatId(-5);
    let game = shared_game();
    game.start(chat, UserId(1)).unwrap();

    let g = game.clone();
    // Every user joins twice
    let results = race(32, move |i| {
        let user = UserId(100 + (i % 16) as u64);
        g.join(chat, user, &format!("player {}", user.0)).map(|(outcome, _)| outcome)
    });
    assert!(results.iter().all(Result::is_ok));

    let room = game.room(chat).unwrap();
    let mut ids: Vec<u64> = room.participants().iter().map(|p| p.user_id.0).collect();
    assert_eq!(ids.len(), 16);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}

#[test]
fn test_concurrent_start_creates_one_room() {
    let chat = ChatId(7);
    let game = shared_game();

    let g = game.clone();
    let results = race(8, move |i| g.start(chat, UserId(i as u64 + 1)));

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == GameError::AlreadyExists));
    assert_eq!(game.active_games(), 1);
}

#[test]
fn test_rooms_in_different_chats_do_not_interfere() {
    let game = shared_game();
    let g = game.clone();

    race(10, move |i| {
        let chat = ChatId(1_000 + i as i64);
        g.start(chat, UserId(1)).unwrap();
        g.join(chat, UserId(2), "@two").unwrap();
        g.join(chat, UserId(3), "@three").unwrap();
        g.close_registration(chat, UserId(1)).unwrap();
        g.choose_prompt_kind(chat, UserId(2), PromptKind::Dare).unwrap();
        g.confirm_answered(chat, UserId(2)).unwrap();
    });

    assert_eq!(game.active_games(), 10);
    for i in 0..10 {
        let room = game.room(ChatId(1_000 + i)).unwrap();
        assert_eq!(room.active_user(), Some(UserId(3)));
    }
}

#[test]
fn test_stop_racing_turn_actions() {
    let chat = ChatId(55);
    let game = shared_game();
    game.start(chat, UserId(1)).unwrap();
    game.join(chat, UserId(2), "@two").unwrap();
    game.close_registration(chat, UserId(1)).unwrap();

    let g = game.clone();
    let results = race(2, move |i| {
        if i == 0 {
            g.stop(chat, UserId(OPERATOR)).map(|_| ())
        } else {
            g.confirm_answered(chat, UserId(2)).map(|_| ())
        }
    });

    // Stop always wins eventually; the confirm either landed first or found no room
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Ok(()) | Err(GameError::NotFound)));
    assert!(game.room(chat).is_none());
}
