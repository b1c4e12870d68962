use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::super::Container;
use super::format_message;

const BANNER: &str = "💰 JunieVest\n   Your Personal Finance Assistant\n";
const PROMPT_HINT: &str = "Ask me about budgeting, saving, investing... (/quit to exit)";
const QUIT_COMMAND: &str = "/quit";

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Interactive session: one line in, one reply out, until EOF or `/quit`.
    ///
    /// Returns the number of turns that reached the assistant.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut session = self.container.session_use_case();

        writer.write_all(BANNER.as_bytes()).await?;
        for message in session.messages() {
            writer
                .write_all(format!("{}\n", format_message(message)).as_bytes())
                .await?;
        }
        writer
            .write_all(format!("\n{PROMPT_HINT}\n> ").as_bytes())
            .await?;
        writer.flush().await?;

        let mut turns = 0;
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim() == QUIT_COMMAND {
                break;
            }

            if let Some(reply) = session.send(&line).await {
                turns += 1;
                writer
                    .write_all(format!("{}\n", format_message(reply)).as_bytes())
                    .await?;
            }
            writer.write_all(b"> ").await?;
            writer.flush().await?;
        }

        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(turns)
    }
}
