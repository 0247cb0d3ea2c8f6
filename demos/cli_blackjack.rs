//! CLI blackjack front end.
//!
//! Prints the table each tick, reads one action per line, and paces the
//! dealer's draws. Set `RUST_LOG=debug` to see state transitions.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use blackjack_table::{
    Action, Card, CardView, RoundState, Session, SessionOptions, Suit, TableView,
};

const DEALER_DRAW_DELAY: Duration = Duration::from_millis(500);

fn main() {
    env_logger::init();
    println!("Blackjack CLI (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = Session::new(SessionOptions::default(), seed);

    loop {
        let view = session.view();
        print_table(&view);

        if view.legal_actions.is_empty() {
            println!("You are out of money. Game over.");
            break;
        }

        println!("{}", format_actions(&view.legal_actions));
        let input = prompt_line("Action: ");
        let action = match input.as_str() {
            "" | "d" | "deal" if view.state == RoundState::Betting => Action::Deal,
            "" | "n" | "new" if view.state == RoundState::Result => Action::NewRound,
            "h" | "hit" => Action::Hit,
            "s" | "stand" => Action::Stand,
            "x" | "double" => Action::DoubleDown,
            "u" | "surrender" => Action::Surrender,
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        session.handle(action);

        let drawn = session.advance();
        animate_dealer(&session, &drawn);
    }
}

/// Reveals the dealer's draws one at a time.
fn animate_dealer(session: &Session, drawn: &[Card]) {
    if drawn.is_empty() {
        return;
    }

    let cards = session.dealer_hand().cards();
    let initial = cards.len() - drawn.len();
    for shown in initial + 1..=cards.len() {
        thread::sleep(DEALER_DRAW_DELAY);
        let partial = &cards[..shown];
        println!(
            "Dealer draws: {} (value {})",
            partial.iter().map(format_card).collect::<Vec<_>>().join(" "),
            blackjack_table::hand::score(partial)
        );
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView) {
    println!(
        "\nBankroll: {} | Bet: {} | Deck: {} cards",
        view.bankroll, view.bet, view.cards_remaining
    );
    if let Some(message) = view.message {
        println!("{}", colorize(&message.to_string(), "31"));
    }

    if view.state == RoundState::Betting {
        return;
    }

    let dealer = view
        .dealer
        .iter()
        .map(|card| match card {
            CardView::Face(card) => format_card(card),
            CardView::Hidden => colorize("??", "34"),
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("Dealer: {dealer} (value {})", view.dealer_score);

    let player = view.player.iter().map(format_card).collect::<Vec<_>>();
    println!("Player: {} (value {})", player.join(" "), view.player_score);

    if let Some(result) = view.result {
        println!("Round net: {}", result.net);
    }
}

fn format_actions(actions: &[Action]) -> String {
    let parts = actions
        .iter()
        .map(|&action| {
            let key = match action {
                Action::Deal => "d",
                Action::Hit => "h",
                Action::Stand => "s",
                Action::DoubleDown => "x",
                Action::Surrender => "u",
                Action::NewRound => "n",
            };
            colorize(&format!("[{key}]{}", action.label()), "32")
        })
        .collect::<Vec<_>>();
    format!("Actions: {}", parts.join(" "))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
