//! Stdin/stdout stand-in for the interception layer.
//!
//! Each input line is one inbound event:
//!
//! ```text
//! chat :setup
//! throw 12
//! retract 12
//! result 12 460
//! wait 3000
//! ```
//!
//! Outbound sends and messages are printed to stdout.
use bytes::Bytes;
use ezd_session::*;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

/// Transport that prints what it would have put on the wire.
#[derive(Debug, Default)]
pub struct Console;

#[async_trait::async_trait]
impl Transport for Console {
    async fn send(&self, kind: Kind, payload: Bytes) {
        println!("{} {}", kind, String::from_utf8_lossy(&payload));
    }
    async fn message(&self, text: String) {
        println!("chat {}", text);
    }
}

/// One parsed input line.
#[derive(Debug)]
pub enum Line {
    Event(Event),
    Wait(Duration),
    Quit,
}

impl Console {
    pub fn parse(line: &str) -> anyhow::Result<Line> {
        let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
        match head {
            "chat" => Ok(Line::Event(Event::Chat(rest.to_string()))),
            "throw" => Ok(Line::Event(Event::Throw(Bytes::from(rest.to_string())))),
            "retract" => Ok(Line::Event(Event::Retract(Bytes::from(rest.to_string())))),
            "result" => Ok(Line::Event(Event::Result(Bytes::from(rest.to_string())))),
            "wait" => rest
                .trim()
                .parse()
                .map(Duration::from_millis)
                .map(Line::Wait)
                .map_err(|_| anyhow::anyhow!("invalid wait: {:?}", rest)),
            "quit" | "exit" => Ok(Line::Quit),
            _ => Err(anyhow::anyhow!("unknown event: {:?}", head)),
        }
    }
    /// Feeds stdin to the engine until end of input or `quit`.
    pub async fn run(engine: &Engine) -> anyhow::Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Self::parse(line) {
                Ok(Line::Event(event)) => match engine.dispatch(event).await {
                    Verdict::Block => log::debug!("[console] blocked {:?}", line),
                    Verdict::Pass => log::trace!("[console] passed {:?}", line),
                },
                Ok(Line::Wait(duration)) => tokio::time::sleep(duration).await,
                Ok(Line::Quit) => break,
                Err(e) => eprintln!("{}", e),
            }
        }
        Ok(())
    }
}
