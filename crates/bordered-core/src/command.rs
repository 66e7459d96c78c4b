/// A follow-up action returned from [`Component::update`](crate::Component::update)
/// or [`Model::init`](crate::Model::init).
///
/// Widgets in this workspace never perform I/O of their own. A command either
/// does nothing or carries messages the parent should route back into its
/// update loop (for instance a field announcing `Changed(value)` after an
/// edit).
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Report the new value to the parent:
/// let cmd = Command::message(Msg::Changed(value));
///
/// // Several messages, delivered in order:
/// let cmd = Command::batch([Command::message(a), Command::message(b)]);
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Combine several commands. Messages are delivered in iteration order.
    ///
    /// No-op entries are dropped; a batch of one command collapses to that
    /// command.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.remove(0),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Whether this command does nothing.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Transform the message type, typically to lift a child component's
    /// command into the parent's message type.
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + Clone + 'static,
    ) -> Command<NewMsg> {
        let inner = match self.inner {
            CommandInner::None => CommandInner::None,
            CommandInner::Message(msg) => CommandInner::Message(f(msg)),
            CommandInner::Batch(cmds) => {
                CommandInner::Batch(cmds.into_iter().map(|c| c.map(f.clone())).collect())
            }
        };
        Command { inner }
    }

    /// Flatten into the carried messages, in delivery order.
    pub fn into_messages(self) -> Vec<Msg> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(self, out: &mut Vec<Msg>) {
        match self.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => out.push(msg),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect_into(out);
                }
            }
        }
    }
}

impl<Msg: Send + 'static> Default for Command<Msg> {
    fn default() -> Self {
        Command::none()
    }
}

impl<Msg: Send + 'static> std::fmt::Debug for Command<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            CommandInner::None => write!(f, "Command::None"),
            CommandInner::Message(_) => write!(f, "Command::Message(..)"),
            CommandInner::Batch(cmds) => write!(f, "Command::Batch({})", cmds.len()),
        }
    }
}
