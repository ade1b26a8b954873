// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, sync::Arc};

use miette::IntoDiagnostic;

use crate::{Color, ColorSpan, ConsoleOptions, CrosstermRenderer, LineReader,
            PromptBuffer, ReadEngine, ReadLineError, ReadRequest, Renderer,
            SharedRenderer, StdMutex, StdinLineReader, lock_or_recover,
            new_shared_renderer};

pub type SharedLineReader = Arc<StdMutex<Box<dyn LineReader + Send>>>;

/// A prompt session on a terminal: its renderer, its line reader, the question being
/// asked, and the current [`ConsoleOptions`].
///
/// It is cheap to clone, and all the clones share the same terminal and state, so it
/// can be handed to other threads. Reads are serialized (one read loop at a time), and
/// each group of writes that belong together (eg: set color, write, reset color) is
/// never interleaved with writes from another thread.
///
/// ```
/// use r3bl_prompt::{Console, LineReaderMock, ReadRequest, RendererMock, ValidationRule};
///
/// let renderer = RendererMock::default();
/// let console = Console::new(renderer.clone(), LineReaderMock::new(["10", "25"]));
///
/// let age: i32 = console
///     .read_line(ReadRequest::plain("Age? ").rule(ValidationRule::min(18)))
///     .unwrap();
///
/// assert_eq!(age, 25);
/// assert_eq!(
///     renderer.screen_lines(),
///     vec!["Age? 10", "The value must be at least 18", "Age? 25"]
/// );
/// ```
#[derive(Clone)]
pub struct Console {
    renderer: SharedRenderer,
    reader: SharedLineReader,
    prompt_buffer: Arc<StdMutex<PromptBuffer>>,
    options: Arc<StdMutex<Arc<ConsoleOptions>>>,
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("options", &self.options())
            .field("prompt_buffer", &*lock_or_recover(&self.prompt_buffer))
            .finish_non_exhaustive()
    }
}

/// stdout, stderr and stdin of this process.
impl Default for Console {
    fn default() -> Self { Self::new(CrosstermRenderer::new_stdout(), StdinLineReader) }
}

impl Console {
    pub fn new(
        renderer: impl Renderer + Send + 'static,
        reader: impl LineReader + Send + 'static,
    ) -> Self {
        Self {
            renderer: new_shared_renderer(renderer),
            reader: Arc::new(StdMutex::new(Box::new(reader))),
            prompt_buffer: Arc::new(StdMutex::new(PromptBuffer::default())),
            options: Arc::new(StdMutex::new(Arc::new(ConsoleOptions::default()))),
        }
    }

    #[must_use]
    pub fn with_options(self, options: ConsoleOptions) -> Self {
        self.configure(options);
        self
    }

    /// Replace the options. A read loop that is already running keeps the options it
    /// started with.
    pub fn configure(&self, options: ConsoleOptions) {
        tracing::debug!(message = "Console configured", ?options);
        *lock_or_recover(&self.options) = Arc::new(options);
    }

    /// Build new options, starting from the defaults, and apply them.
    ///
    /// ```
    /// use r3bl_prompt::{BeepBehavior, Console};
    ///
    /// let console = Console::default();
    /// console.configure_with(|options| {
    ///     options.throw_on_invalid_input = true;
    ///     options.notification_chain.add(BeepBehavior);
    /// });
    /// assert!(console.options().throw_on_invalid_input);
    /// ```
    pub fn configure_with(&self, configure_fn: impl FnOnce(&mut ConsoleOptions)) {
        let mut options = ConsoleOptions::default();
        configure_fn(&mut options);
        self.configure(options);
    }

    #[must_use]
    pub fn options(&self) -> Arc<ConsoleOptions> { Arc::clone(&lock_or_recover(&self.options)) }

    #[must_use]
    pub fn renderer(&self) -> &SharedRenderer { &self.renderer }

    #[must_use]
    pub fn is_interactive(&self) -> bool { lock_or_recover(&self.renderer).is_interactive() }

    /// Start asking a question. Everything written from now on, until the next
    /// [`Self::read_line()`], is drawn again before each retry.
    pub fn ask(&self) -> &Self {
        let origin = {
            let mut renderer = lock_or_recover(&self.renderer);
            if renderer.is_interactive() {
                renderer.get_cursor().ok()
            } else {
                None
            }
        };
        lock_or_recover(&self.prompt_buffer).begin_question(origin);
        self
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn write(&self, span: &ColorSpan) -> miette::Result<&Self> {
        self.emit(&span.text, span.color, false).into_diagnostic()?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn write_spans(&self, spans: &[ColorSpan]) -> miette::Result<&Self> {
        for span in spans {
            self.emit(&span.text, span.color, false).into_diagnostic()?;
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn write_line(&self, span: &ColorSpan) -> miette::Result<&Self> {
        self.emit(&span.text, span.color, true).into_diagnostic()?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn write_line_spans(&self, spans: &[ColorSpan]) -> miette::Result<&Self> {
        self.write_spans(spans)?;
        self.new_line()
    }

    /// Text in the console's plain colors.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn write_plain(&self, text: &str) -> miette::Result<&Self> {
        let color = self.options().colors.plain_color();
        self.emit(text, color, false).into_diagnostic()?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn write_line_plain(&self, text: &str) -> miette::Result<&Self> {
        let color = self.options().colors.plain_color();
        self.emit(text, color, true).into_diagnostic()?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    pub fn new_line(&self) -> miette::Result<&Self> {
        self.emit("", Color::default(), true).into_diagnostic()?;
        Ok(self)
    }

    /// Ask until the input converts and passes every rule in `request`.
    ///
    /// # Errors
    ///
    /// See [`ReadEngine::read_line()`].
    pub fn read_line<T: 'static>(&self, request: ReadRequest<T>) -> Result<T, ReadLineError> {
        let options = self.options();
        let mut reader = lock_or_recover(&self.reader);
        let mut engine = ReadEngine {
            renderer: &self.renderer,
            reader: &mut **reader,
            prompt_buffer: &self.prompt_buffer,
            options: &options,
        };
        engine.read_line(&request)
    }

    /// Same as [`Self::read_line()`], with the prompt at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// See [`ReadEngine::read_line()`].
    pub fn read_line_at<T: 'static>(
        &self,
        x: u16,
        y: u16,
        request: ReadRequest<T>,
    ) -> Result<T, ReadLineError> {
        self.read_line(request.at(x, y))
    }

    /// Write, then record (if a question is being asked). The two locks are never held
    /// at the same time.
    fn emit(&self, text: &str, color: Color, is_line_break: bool) -> io::Result<()> {
        {
            let mut renderer = lock_or_recover(&self.renderer);
            if is_line_break {
                renderer.write_line(text, color)?;
            } else {
                renderer.write(text, color)?;
            }
        }
        lock_or_recover(&self.prompt_buffer).record(text, color, is_line_break);
        Ok(())
    }
}
