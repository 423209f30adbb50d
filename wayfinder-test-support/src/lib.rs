//! Shared test utilities used across wayfinder crates.
//!
//! - [`tracing::RecordingLayer`] captures spans and events so tests can assert
//!   instrumentation without parsing formatted log output.
//! - [`proptest_profile::ProptestRunProfile`] reads case-count and fork
//!   overrides from the environment so every property suite honours the same
//!   knobs.

pub mod proptest_profile;

pub mod tracing {
    //! Recording layer for capturing spans and events in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Closed span captured by [`RecordingLayer`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the callsite metadata.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: HashMap<String, String>,
    }

    /// Event captured by [`RecordingLayer`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Level the event was emitted at.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Structured fields, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the formatted `message` field, if any.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    #[derive(Default)]
    struct Journal {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    /// Layer that keeps every closed span and emitted event in memory.
    ///
    /// # Examples
    /// ```
    /// use tracing_subscriber::layer::SubscriberExt;
    /// use wayfinder_test_support::tracing::RecordingLayer;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::info!(answer = 42, "hello");
    /// });
    /// assert_eq!(layer.events().len(), 1);
    /// assert!(layer.spans().is_empty());
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        journal: Arc<Mutex<Journal>>,
    }

    impl RecordingLayer {
        fn journal(&self) -> MutexGuard<'_, Journal> {
            // A panicking test may poison the lock; the records are still usable.
            self.journal
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
        }

        /// Snapshot of the closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.journal().spans.clone()
        }

        /// Snapshot of the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.journal().events.clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.journal()
                .spans
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Returns every event emitted at `level`.
        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
            self.journal()
                .events
                .iter()
                .filter(|event| event.level == level)
                .cloned()
                .collect()
        }
    }

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
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldCollector(&mut record.fields));
            span.extensions_mut().insert(record);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(record) = span.extensions_mut().get_mut::<SpanRecord>() {
                values.record(&mut FieldCollector(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(record) = span.extensions_mut().remove::<SpanRecord>() {
                self.journal().spans.push(record);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldCollector(&mut fields));
            let metadata = event.metadata();
            self.journal().events.push(EventRecord {
                level: *metadata.level(),
                target: metadata.target().to_owned(),
                fields,
            });
        }
    }

    struct FieldCollector<'a>(&'a mut HashMap<String, String>);

    impl FieldCollector<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldCollector<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value.to_owned());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value.to_string());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value.to_string());
        }
    }
}
