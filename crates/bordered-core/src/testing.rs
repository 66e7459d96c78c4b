use crate::command::Command;
use crate::component::Component;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` exercises the init/update/view cycle in a plain `#[test]`
/// function. Messages carried by returned commands are queued and can be
/// flushed with [`drain_messages`](TestProgram::drain_messages).
///
/// # Example
///
/// ```rust,ignore
/// use bordered_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<LoginForm>::new(());
/// prog.send(Msg::Key(tab));
/// prog.drain_messages();
/// assert!(prog.model().password.is_focused());
///
/// let output = prog.render_string(40, 6);
/// assert!(output.contains("╭─ Password ─"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Messages produced by `init` are queued; call
    /// [`drain_messages`](TestProgram::drain_messages) to process them.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Messages queued but not yet processed.
    pub fn pending(&self) -> &[M::Message] {
        &self.pending_messages
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        self.pending_messages.extend(cmd.into_messages());
    }
}

/// Flatten the messages a command carries, in delivery order, so component
/// tests can assert on what an update reported.
pub fn collect_messages<Msg: Send + 'static>(cmd: Command<Msg>) -> Vec<Msg> {
    cmd.into_messages()
}

/// Render a single component filling a `width` x `height` terminal.
pub fn render_component<C: Component>(component: &C, width: u16, height: u16) -> Buffer {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            component.view(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Concatenate each row of `buf` into a line; rows are joined by newlines.
/// Trailing whitespace within each row is preserved.
pub fn buffer_to_string(buf: &Buffer) -> String {
    buffer_lines(buf).join("\n")
}

/// Rows of `buf` as strings.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area: Rect = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
