//! # Age Tool State
//!
//! Input, results and the background insights fetch for the age tool.
//!
//! ## Concurrency:
//! The insights call is the only non-synchronous operation in the app.
//! Each submission spawns one worker thread that sends its result back
//! over an mpsc channel, tagged with the sequence number it was issued
//! under. Only a response matching the newest sequence number is
//! accepted; anything else is a superseded request and gets dropped.
//! The age results themselves never wait on the fetch.

use chrono::{Local, NaiveDate};
use log::{debug, info};
use shared::{AgeDetails, BirthdayInsights, NextBirthday};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use crate::backend::Backend;

/// State of the age tool
pub struct AgeState {
    /// Birth date currently selected in the picker
    pub birthdate: NaiveDate,

    /// Elapsed-age result of the last calculation
    pub age: Option<AgeDetails>,

    /// Next-birthday result of the last calculation
    pub next_birthday: Option<NextBirthday>,

    /// Insights for the last calculation, once the fetch lands
    pub insights: Option<BirthdayInsights>,

    /// Whether an insights fetch is in flight
    pub insights_loading: bool,

    /// User-facing error (birth date in the future)
    pub error_message: Option<String>,

    /// Channel the worker threads report back on
    insights_tx: Sender<(u64, BirthdayInsights)>,
    insights_rx: Receiver<(u64, BirthdayInsights)>,

    /// Sequence number of the newest request; stale responses are dropped
    request_seq: u64,
}

impl AgeState {
    pub fn new() -> Self {
        let (insights_tx, insights_rx) = channel();

        Self {
            birthdate: Local::now().date_naive(),
            age: None,
            next_birthday: None,
            insights: None,
            insights_loading: false,
            error_message: None,
            insights_tx,
            insights_rx,
            request_seq: 0,
        }
    }

    /// Run the calculation for the selected birth date and kick off the
    /// insights fetch in the background. The synchronous results render
    /// immediately regardless of how the fetch turns out.
    pub fn calculate(&mut self, backend: &Backend) {
        self.error_message = None;

        let birth = self.birthdate;
        let today = Local::now().date_naive();

        match backend.age_service.elapsed(birth, today) {
            Ok(age) => {
                info!(
                    "📅 Calculated age for {}: {}y {}m {}d",
                    birth, age.years, age.months, age.days
                );
                self.age = Some(age);
                self.next_birthday = Some(backend.age_service.next_anniversary(birth, today));
                self.spawn_insights_fetch(backend, birth);
            }
            Err(error) => {
                self.reset_results();
                self.error_message = Some(error.to_string());
            }
        }
    }

    /// Drain finished fetches; called every frame from the update loop.
    pub fn poll_insights(&mut self) {
        while let Ok((seq, insights)) = self.insights_rx.try_recv() {
            if seq == self.request_seq {
                debug!("Insights request #{} completed", seq);
                self.insights = Some(insights);
                self.insights_loading = false;
            } else {
                debug!("Dropping superseded insights response #{}", seq);
            }
        }
    }

    /// Clear all results for a fresh date ("Check Another Date"). Any
    /// in-flight fetch is superseded.
    pub fn reset(&mut self) {
        self.reset_results();
        self.request_seq += 1;
    }

    fn reset_results(&mut self) {
        self.age = None;
        self.next_birthday = None;
        self.insights = None;
        self.insights_loading = false;
        self.error_message = None;
    }

    fn spawn_insights_fetch(&mut self, backend: &Backend, birth: NaiveDate) {
        self.request_seq += 1;
        let seq = self.request_seq;
        self.insights = None;
        self.insights_loading = true;

        let service = backend.insights_service.clone();
        let tx = self.insights_tx.clone();
        thread::spawn(move || {
            let insights = service.fetch_insights(birth);
            // The receiver only disappears on shutdown; nothing to do then
            let _ = tx.send((seq, insights));
        });
    }
}

impl Default for AgeState {
    fn default() -> Self {
        Self::new()
    }
}
