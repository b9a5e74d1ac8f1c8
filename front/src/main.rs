mod api;
mod app;

use clap::Parser;
use tasks_api::v1::TaskStatus;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::{api::ApiClient, app::App};

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the task API.
    #[arg(
        long,
        env = "TASKS_API_URL",
        default_value = "http://127.0.0.1:2022/api/v1"
    )]
    url: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let client = ApiClient::new(args.url);

    let mut app = App::default();
    app.load(&client).await;
    render(&app);

    let mut lines = BufReader::new(stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse(&line) {
            Some(Command::Add(title)) => {
                app.create(&client, &title).await;
                render(&app);
            }
            Some(Command::Toggle(id)) => {
                app.toggle(&client, id).await;
                render(&app);
            }
            Some(Command::Remove(id)) => {
                app.delete(&client, id).await;
                render(&app);
            }
            Some(Command::List) => render(&app),
            Some(Command::Refresh) => {
                app.load(&client).await;
                render(&app);
            }
            Some(Command::Health) => match client.healthcheck().await {
                Ok(health) => println!("{} at {}", health.status, health.timestamp),
                Err(err) => tracing::error!("healthcheck failed: {err:?}"),
            },
            Some(Command::Quit) => break,
            None => {
                println!("commands: add <title> | toggle <id> | rm <id> | list | refresh | health | quit");
            }
        }
    }

    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Command {
    Add(String),
    Toggle(i64),
    Remove(i64),
    List,
    Refresh,
    Health,
    Quit,
}

fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "add" if !rest.is_empty() => Some(Command::Add(rest.to_owned())),
        "toggle" | "done" => rest.parse().ok().map(Command::Toggle),
        "rm" | "delete" => rest.parse().ok().map(Command::Remove),
        "list" | "ls" => Some(Command::List),
        "refresh" => Some(Command::Refresh),
        "health" => Some(Command::Health),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn render(app: &App) {
    for task in &app.tasks {
        let mark = match task.status {
            TaskStatus::Pending => ' ',
            TaskStatus::Completed => 'x',
        };

        println!(
            "[{mark}] {:>4}  {}  ({})",
            task.id,
            task.title,
            task.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    println!("{} pending, {} completed", app.pending(), app.completed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_a_multi_word_title() {
        assert_eq!(
            parse("add buy milk and eggs"),
            Some(Command::Add(String::from("buy milk and eggs")))
        );
    }

    #[test]
    fn add_without_a_title_is_rejected() {
        assert_eq!(parse("add"), None);
        assert_eq!(parse("add   "), None);
    }

    #[test]
    fn parses_ids_for_toggle_and_remove() {
        assert_eq!(parse("toggle 3"), Some(Command::Toggle(3)));
        assert_eq!(parse("done 3"), Some(Command::Toggle(3)));
        assert_eq!(parse("rm 12"), Some(Command::Remove(12)));
        assert_eq!(parse("delete 12"), Some(Command::Remove(12)));
    }

    #[test]
    fn non_numeric_ids_are_rejected() {
        assert_eq!(parse("toggle abc"), None);
        assert_eq!(parse("rm"), None);
    }

    #[test]
    fn bare_commands_and_aliases() {
        assert_eq!(parse("  list "), Some(Command::List));
        assert_eq!(parse("ls"), Some(Command::List));
        assert_eq!(parse("refresh"), Some(Command::Refresh));
        assert_eq!(parse("health"), Some(Command::Health));
        assert_eq!(parse("exit"), Some(Command::Quit));
        assert_eq!(parse("frobnicate"), None);
        assert_eq!(parse(""), None);
    }
}
