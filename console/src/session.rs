use crate::commands::{self, Command, HELP};
use decision_receipt::{render, DecisionApi, SelectedFile, ViewController};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

pub enum Step {
    Continue(String),
    Quit,
}

/// Maps typed commands onto the view controller and redraws after each.
pub struct Session<A> {
    controller: ViewController<A>,
}

impl<A: DecisionApi> Session<A> {
    pub fn new(controller: ViewController<A>) -> Self {
        Self { controller }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &ViewController<A> {
        &self.controller
    }

    pub async fn handle(&mut self, command: Command) -> Step {
        let refused = match command {
            Command::SelectFile(path) => match SelectedFile::from_path(&path).await {
                Ok(file) => {
                    self.controller.select_file(file);
                    None
                }
                Err(e) => {
                    log::warn!("Could not select {}: {}", path.display(), e);
                    Some(format!("could not open {}: {}", path.display(), e))
                }
            },
            Command::Upload => self.controller.upload().await.err().map(|e| e.to_string()),
            Command::Ask(question) => {
                self.controller.set_question(question);
                None
            }
            Command::Query(question) => {
                if let Some(question) = question {
                    self.controller.set_question(question);
                }
                self.controller.query().await.err().map(|e| e.to_string())
            }
            Command::Show => None,
            Command::Help => return Step::Continue(HELP.to_string()),
            Command::Quit => return Step::Quit,
        };

        let view = render(self.controller.state());
        match refused {
            Some(message) => Step::Continue(format!("{}\n! {}", view, message)),
            None => Step::Continue(view),
        }
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        stdout
            .write_all(format!("{}\n{}\n> ", render(self.controller.state()), HELP).as_bytes())
            .await?;
        stdout.flush().await?;

        while let Some(line) = lines.next_line().await? {
            let output = match commands::parse(&line) {
                Ok(None) => String::new(),
                Ok(Some(command)) => match self.handle(command).await {
                    Step::Continue(output) => output,
                    Step::Quit => break,
                },
                Err(message) => format!("! {}", message),
            };

            if !output.is_empty() {
                stdout.write_all(output.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
        }

        Ok(())
    }
}
