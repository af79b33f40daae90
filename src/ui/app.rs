use crate::client::{ClassifyError, SentimentResult};
use crate::session::{RequestDispatcher, RequestId, RequestSequencer};
use crate::trigger::{TriggerDecision, TriggerMode, TriggerPolicy};
use crate::ui::input_text::InputText;
use crate::ui::mvi::Reducer;
use crate::ui::sentiment::{view_model, SentimentIntent, SentimentReducer, ViewModel, ViewState};
use std::time::{Duration, Instant};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Single source of truth for the session.
///
/// Everything here is mutated on the UI loop only. Network work goes out
/// through the dispatcher and comes back via [`App::on_classified`].
pub struct App {
    should_quit: bool,
    input: InputText,
    /// Panel lifecycle (MVI pattern).
    view: ViewState,
    trigger: TriggerPolicy,
    sequencer: RequestSequencer,
    dispatcher: Box<dyn RequestDispatcher>,
    endpoint: String,
}

impl App {
    pub fn new(
        mode: TriggerMode,
        endpoint: impl Into<String>,
        dispatcher: Box<dyn RequestDispatcher>,
    ) -> Self {
        Self {
            should_quit: false,
            input: InputText::new(),
            view: ViewState::default(),
            trigger: TriggerPolicy::new(mode),
            sequencer: RequestSequencer::new(),
            dispatcher,
            endpoint: endpoint.into(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn input(&self) -> &InputText {
        &self.input
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_model(&self) -> ViewModel {
        view_model(&self.input, &self.view)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn trigger_mode(&self) -> TriggerMode {
        self.trigger.mode()
    }

    // -- Editing --------------------------------------------------------------

    pub fn insert_char(&mut self, ch: char, now: Instant) {
        self.input.insert_char(ch);
        self.on_edit(now);
    }

    pub fn on_paste(&mut self, text: &str, now: Instant) {
        if text.is_empty() {
            return;
        }
        self.input.insert_str(text);
        self.on_edit(now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.input.backspace() {
            self.on_edit(now);
        }
    }

    pub fn delete(&mut self, now: Instant) {
        if self.input.delete() {
            self.on_edit(now);
        }
    }

    pub fn clear_input(&mut self, now: Instant) {
        if self.input.clear() {
            self.on_edit(now);
        }
    }

    pub fn move_left(&mut self) {
        self.input.move_left();
    }

    pub fn move_right(&mut self) {
        self.input.move_right();
    }

    pub fn move_home(&mut self) {
        self.input.move_home();
    }

    pub fn move_end(&mut self) {
        self.input.move_end();
    }

    // -- Lifecycle ------------------------------------------------------------

    /// Classify the current text now, bypassing the debounce window.
    pub fn reanalyze(&mut self) {
        let decision = self.trigger.flush(self.input.as_str());
        self.apply_decision(decision);
    }

    /// Close the error panel.
    pub fn dismiss_error(&mut self) {
        dispatch_mvi!(self, view, SentimentReducer, SentimentIntent::Dismiss);
    }

    /// Advance the spinner and release debounced text that became due.
    pub fn on_tick(&mut self, now: Instant) {
        dispatch_mvi!(self, view, SentimentReducer, SentimentIntent::AnimationTick);
        if let Some(text) = self.trigger.poll(now) {
            self.start_request(text);
        }
    }

    /// How long the loop may sleep before the next debounce deadline.
    pub fn time_until_deadline(&self, now: Instant) -> Option<Duration> {
        self.trigger
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Apply the outcome of request `request_id` if it is still the latest.
    ///
    /// Returns false when the outcome was stale and dropped.
    pub fn on_classified(
        &mut self,
        request_id: RequestId,
        outcome: Result<SentimentResult, ClassifyError>,
    ) -> bool {
        if !self.sequencer.accept(request_id) {
            tracing::debug!(
                request = %request_id,
                latest = ?self.sequencer.latest(),
                "Dropping stale classification"
            );
            return false;
        }

        let intent = match outcome {
            Ok(result) => {
                tracing::debug!(
                    request = %request_id,
                    label = %result.label(),
                    score = result.score(),
                    "Classification accepted"
                );
                SentimentIntent::Classified { result }
            }
            Err(error) => SentimentIntent::Failed { error },
        };
        dispatch_mvi!(self, view, SentimentReducer, intent);
        true
    }

    fn on_edit(&mut self, now: Instant) {
        let decision = self.trigger.on_edit(self.input.as_str(), now);
        self.apply_decision(decision);
    }

    fn apply_decision(&mut self, decision: TriggerDecision) {
        match decision {
            TriggerDecision::Dispatch(text) => self.start_request(text),
            TriggerDecision::Scheduled => {}
            TriggerDecision::Reset => self.reset(),
        }
    }

    fn start_request(&mut self, text: String) {
        let request_id = self.sequencer.issue();
        tracing::debug!(request = %request_id, chars = text.chars().count(), "Dispatching classification");
        dispatch_mvi!(
            self,
            view,
            SentimentReducer,
            SentimentIntent::Dispatched { request_id }
        );
        self.dispatcher.dispatch(request_id, text);
    }

    fn reset(&mut self) {
        self.sequencer.invalidate();
        dispatch_mvi!(self, view, SentimentReducer, SentimentIntent::Reset);
    }
}
