use crate::{
    config::ApiConfig,
    controller::{Completion, Controller, Phase},
    form::{FormPrompt, QueryForm, Step},
    http,
    lookup::{LookupClient, LookupRequest, LookupResult},
    panel::ResultPanel,
};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc::{self, UnboundedSender},
};

type Outcome = (u64, Result<LookupResult, http::Error>);

/// Interactive lookup session: a form on the input, the result panel and
/// notifications on the output.
pub struct Session {
    client: LookupClient,
    controller: Controller,
    form: QueryForm,
    prompt: FormPrompt,
}

impl Session {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let client = LookupClient::new(api).context("Cannot create the http client")?;
        let controller = Controller::new(api.base_url()?)?;

        Ok(Session {
            client,
            controller,
            form: QueryForm::default(),
            prompt: FormPrompt::new(),
        })
    }

    /// Runs until the input is exhausted. The latest pending lookup, if
    /// any, is awaited and rendered before returning.
    pub async fn run<R, W>(mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
        let mut lines = input.lines();
        let mut input_closed = false;

        writeln!(output, "{}", ResultPanel::new(self.controller.result()))?;
        write!(output, "{}", self.prompt.prompt(&self.form))?;
        output.flush()?;

        loop {
            tokio::select! {
                line = lines.next_line(), if !input_closed => {
                    match line.context("Cannot read input")? {
                        Some(line) => {
                            self.on_line(&line, &tx, output)?;
                            write!(output, "{}", self.prompt.prompt(&self.form))?;
                        }
                        None => {
                            log::debug!("input closed");
                            writeln!(output)?;
                            input_closed = true;
                        }
                    }
                }
                Some((seq, outcome)) = rx.recv() => {
                    self.on_outcome(seq, outcome, output)?;
                    if !input_closed {
                        write!(output, "{}", self.prompt.prompt(&self.form))?;
                    }
                }
            }
            output.flush()?;

            if input_closed {
                match self.controller.phase() {
                    Phase::Pending { request } => {
                        log::debug!("input closed, waiting for #{}", request.seq)
                    }
                    _ => break,
                }
            }
        }

        Ok(())
    }

    fn on_line<W: Write>(
        &mut self,
        line: &str,
        tx: &UnboundedSender<Outcome>,
        output: &mut W,
    ) -> Result<()> {
        match self.prompt.feed(&mut self.form, line) {
            Step::Next => {}
            Step::Invalid(message) => writeln!(output, "{}", message)?,
            Step::Submitted(submission) => {
                let request = self.controller.submit(submission)?;
                self.spawn_fetch(request, tx.clone());
            }
        }

        Ok(())
    }

    fn on_outcome<W: Write>(
        &mut self,
        seq: u64,
        outcome: Result<LookupResult, http::Error>,
        output: &mut W,
    ) -> Result<()> {
        match self.controller.complete(seq, outcome) {
            Completion::Applied => {
                writeln!(output)?;
                writeln!(output, "{}", ResultPanel::new(self.controller.result()))?;
            }
            Completion::Failed => {
                if let Phase::Failed { notification } = self.controller.phase() {
                    writeln!(output)?;
                    writeln!(output, "{}", notification)?;
                }
            }
            Completion::Stale => {}
        }

        Ok(())
    }

    fn spawn_fetch(&self, request: LookupRequest, tx: UnboundedSender<Outcome>) {
        let client = self.client.clone();

        tokio::spawn(async move {
            let outcome = client.fetch(&request).await;
            if tx.send((request.seq, outcome)).is_err() {
                log::debug!("session closed before #{} completed", request.seq);
            }
        });
    }
}
