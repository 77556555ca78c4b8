//! Dispatcher routing tests: help, catalog offers, per-channel sessions,
//! and the shared `!endgame` escape hatch.

use std::sync::Arc;

use partybot::{
    ChannelId, ChatCommand, CoinFlipGame, Dispatcher, GameRng, InvestigationGame, MessageId,
    Player, PlayerId, RecordingMessenger,
};

const LOBBY: ChannelId = ChannelId::new(1);
const DEN: ChannelId = ChannelId::new(2);

fn player(id: u64) -> Player {
    Player::new(PlayerId::new(id), format!("p{id}"))
}

fn roster(count: u64) -> Vec<Player> {
    (1..=count).map(player).collect()
}

fn command(channel: ChannelId, keyword: &str, args: &[&str], mentions: Vec<Player>) -> ChatCommand {
    ChatCommand {
        channel,
        message: MessageId::new(0),
        author: player(99),
        keyword: keyword.to_string(),
        args: args.iter().map(|a| (*a).to_string()).collect(),
        mentions,
    }
}

fn dispatcher(messenger: &Arc<RecordingMessenger>) -> Dispatcher {
    let mut dispatcher = Dispatcher::new(messenger.clone());
    dispatcher.register(Box::new(InvestigationGame::cthulhu(GameRng::new(7))));
    dispatcher.register(Box::new(CoinFlipGame::new(GameRng::new(7))));
    dispatcher
}

#[tokio::test]
async fn test_help_lists_registered_games() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher.dispatch(&command(LOBBY, "help", &[], vec![])).await;

    assert_eq!(
        messenger.last_channel_text(LOBBY).unwrap(),
        "Available games: `!cthulhu` and `!coin`. Use `!help <game>` for rules"
    );
}

#[tokio::test]
async fn test_help_with_game_posts_rules() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "help", &["cthulhu"], vec![]))
        .await;

    let text = messenger.last_channel_text(LOBBY).unwrap();
    assert!(text.contains("Don't Mess with Cthulhu"));
    assert!(text.contains("`!cthulhu"));
}

#[tokio::test]
async fn test_help_strips_command_prefix_from_argument() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "help", &["!coin"], vec![]))
        .await;

    let text = messenger.last_channel_text(LOBBY).unwrap();
    assert!(text.contains("Call the toss"));
}

#[tokio::test]
async fn test_help_with_unknown_game() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "help", &["chess"], vec![]))
        .await;

    assert_eq!(
        messenger.last_channel_text(LOBBY).unwrap(),
        "No game answers to `!chess`"
    );
}

#[tokio::test]
async fn test_unclaimed_command_is_silent() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher.dispatch(&command(LOBBY, "chess", &[], vec![])).await;

    assert!(messenger.events().is_empty());
    assert!(!dispatcher.is_active(LOBBY));
}

#[tokio::test]
async fn test_start_claims_the_channel() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "cthulhu", &[], roster(4)))
        .await;

    assert!(dispatcher.is_active(LOBBY));
    assert!(!dispatcher.is_active(DEN));
}

#[tokio::test]
async fn test_active_channel_rejects_second_game() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "cthulhu", &[], roster(4)))
        .await;
    messenger.clear();

    // The running session sees the keyword, ignores it, and no second game
    // starts.
    dispatcher
        .dispatch(&command(LOBBY, "cthulhu", &[], roster(3)))
        .await;

    assert!(messenger.events().is_empty());
    assert!(dispatcher.is_active(LOBBY));
}

#[tokio::test]
async fn test_channels_are_independent() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "cthulhu", &[], roster(4)))
        .await;
    dispatcher
        .dispatch(&command(DEN, "cthulhu", &[], roster(3)))
        .await;

    assert!(dispatcher.is_active(LOBBY));
    assert!(dispatcher.is_active(DEN));

    dispatcher.dispatch(&command(DEN, "endgame", &[], vec![])).await;

    assert!(dispatcher.is_active(LOBBY));
    assert!(!dispatcher.is_active(DEN));
}

#[tokio::test]
async fn test_endgame_concludes_and_frees_the_channel() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "cthulhu", &[], roster(4)))
        .await;
    dispatcher.dispatch(&command(LOBBY, "endgame", &[], vec![])).await;

    assert_eq!(messenger.last_channel_text(LOBBY).unwrap(), "Game concluded.");
    assert!(!dispatcher.is_active(LOBBY));

    // The freed channel can host a new game right away.
    dispatcher
        .dispatch(&command(LOBBY, "cthulhu", &[], roster(3)))
        .await;
    assert!(dispatcher.is_active(LOBBY));
}

#[tokio::test]
async fn test_endgame_without_game_is_silent() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher.dispatch(&command(LOBBY, "endgame", &[], vec![])).await;

    assert!(messenger.events().is_empty());
}

#[tokio::test]
async fn test_resolved_command_leaves_channel_idle() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "coin", &["heads"], vec![]))
        .await;

    assert!(!dispatcher.is_active(LOBBY));
    assert!(messenger
        .last_channel_text(LOBBY)
        .unwrap()
        .starts_with("Result: "));
}

#[tokio::test]
async fn test_pending_coin_session_finishes_on_call() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher.dispatch(&command(LOBBY, "coin", &[], vec![])).await;
    assert!(dispatcher.is_active(LOBBY));

    dispatcher.dispatch(&command(LOBBY, "heads", &[], vec![])).await;

    assert!(!dispatcher.is_active(LOBBY));
    let texts = messenger.channel_texts(LOBBY);
    assert!(texts[texts.len() - 2].starts_with("Result: "));
    assert_eq!(texts[texts.len() - 1], "Game concluded.");
}

#[tokio::test]
async fn test_help_works_while_a_game_runs() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "cthulhu", &[], roster(4)))
        .await;
    messenger.clear();

    dispatcher.dispatch(&command(LOBBY, "help", &[], vec![])).await;

    assert!(messenger
        .last_channel_text(LOBBY)
        .unwrap()
        .starts_with("Available games: "));
    assert!(dispatcher.is_active(LOBBY));
}

#[tokio::test]
async fn test_failed_start_leaves_channel_idle() {
    let messenger = Arc::new(RecordingMessenger::new());
    let mut dispatcher = dispatcher(&messenger);

    dispatcher
        .dispatch(&command(LOBBY, "cthulhu", &[], roster(2)))
        .await;

    assert!(!dispatcher.is_active(LOBBY));
    assert!(messenger
        .last_channel_text(LOBBY)
        .unwrap()
        .contains("needs at least 3 @players"));
}
