use crate::command::Command;
use ratatui::Frame;

/// A top-level screen that owns one or more components.
///
/// The host drives an **init -> update -> view** cycle: [`init`](Model::init)
/// builds the initial state, every incoming event becomes a message passed to
/// [`update`](Model::update), and [`view`](Model::view) redraws the frame after
/// each update. Messages carried by returned [`Command`]s are fed back into
/// `update` before the next draw.
///
/// The workspace does not ship a terminal event loop; hosts bring their own
/// and [`TestProgram`](crate::testing::TestProgram) drives a `Model`
/// headlessly in tests.
pub trait Model: Sized + Send + 'static {
    /// The screen's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`]. Use `()` when none is
    /// needed.
    type Flags: Send + 'static;

    /// Create the initial state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for follow-up
    /// messages.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Should be a pure function of `&self`, apart
    /// from components recording where they were drawn.
    fn view(&self, frame: &mut Frame);
}
