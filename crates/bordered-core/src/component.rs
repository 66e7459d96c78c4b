use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable widget that owns its state and renders into a given [`Rect`].
///
/// A parent (usually a [`Model`](crate::Model)) decides *where* each child
/// renders by passing it a sub-region of the frame, and routes messages to it
/// by wrapping the child's message type in one of its own variants:
///
/// ```rust,ignore
/// use bordered_core::{Command, Component, Model};
/// use bordered_field::field::{self, BorderedField};
///
/// struct Login { user: BorderedField }
///
/// enum Msg { User(field::Message) }
///
/// impl Model for Login {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Login { user: BorderedField::new("Username") }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::User(m) => self.user.update(m).map(Msg::User),
///         }
///     }
///
///     fn view(&self, frame: &mut ratatui::Frame) {
///         let area = ratatui::layout::Rect::new(0, 0, 30, 3);
///         self.user.view(frame, area);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's message type, covering both inputs it reacts to and
    /// outputs it reports to the parent.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] carrying any
    /// messages the parent should see.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area` of the [`Frame`]. Implementations confine all
    /// drawing to that rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has keyboard focus.
    ///
    /// A parent can query this to decide which child should receive key
    /// events. The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
