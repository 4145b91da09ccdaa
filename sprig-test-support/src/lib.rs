//! Shared test utilities used across sprig crates.

pub mod tracing {
    //! Recording layer that captures spans and events for assertions.
    use std::collections::BTreeMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::{Layer, Registry};

    /// Structured fields rendered as strings, keyed by field name.
    pub type Fields = BTreeMap<String, String>;

    /// Layer capturing closed spans and emitted events in order.
    ///
    /// Clones share the same storage, so a test keeps one handle while the
    /// subscriber owns another.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        capture: Arc<Mutex<Capture>>,
    }

    #[derive(Default)]
    struct Capture {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    /// A closed span.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the callsite metadata.
        pub name: String,
        /// Fields recorded at creation or later through `Span::record`.
        pub fields: Fields,
    }

    /// An emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Event fields, including `message` for formatted events.
        pub fields: Fields,
    }

    impl EventRecord {
        /// Returns the formatted `message` field, if any.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    impl RecordingLayer {
        /// Runs `f` with a fresh recording subscriber installed as the
        /// thread default, returning its output and the layer.
        ///
        /// # Examples
        /// ```
        /// use sprig_test_support::tracing::RecordingLayer;
        ///
        /// let ((), layer) = RecordingLayer::capture(|| tracing::info!(answer = 42, "hello"));
        /// let event = layer.event_with_message("hello").expect("event recorded");
        /// assert_eq!(event.fields.get("answer").map(String::as_str), Some("42"));
        /// ```
        pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Self) {
            let layer = Self::default();
            let subscriber = Registry::default().with(layer.clone());
            let output = tracing::subscriber::with_default(subscriber, f);
            (output, layer)
        }

        /// Returns the closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use sprig_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.lock().spans.clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.lock().events.clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<SpanRecord> {
            self.lock().spans.iter().find(|span| span.name == name).cloned()
        }

        /// Returns the first event whose message equals `message`.
        #[must_use]
        pub fn event_with_message(&self, message: &str) -> Option<EventRecord> {
            self.lock()
                .events
                .iter()
                .find(|event| event.message() == Some(message))
                .cloned()
        }

        fn lock(&self) -> MutexGuard<'_, Capture> {
            self.capture.lock().expect("recording layer lock poisoned")
        }
    }

    /// Per-span storage kept in registry extensions until the span closes.
    struct OpenSpan(SpanRecord);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut record = SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields: Fields::new(),
            };
            attrs.record(&mut FieldRecorder(&mut record.fields));
            span.extensions_mut().insert(OpenSpan(record));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldRecorder(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().remove::<OpenSpan>() {
                self.lock().spans.push(record);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut FieldRecorder(&mut fields));
            self.lock().events.push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a>(&'a mut Fields);

    impl FieldRecorder<'_> {
        fn insert(&mut self, field: &Field, value: impl ToString) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value);
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value);
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value);
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value);
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value);
        }

        fn record_i128(&mut self, field: &Field, value: i128) {
            self.insert(field, value);
        }

        fn record_u128(&mut self, field: &Field, value: u128) {
            self.insert(field, value);
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.insert(field, value);
        }
    }

}

pub mod ci;
