//! What a molecule carries.

use mc_core::MsgId;

/// The payload of a molecule, tagged by the role that should receive it.
///
/// Information molecules travel transmitter → receiver; acknowledgements
/// travel receiver → transmitter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    Information(MsgId),
    Acknowledgement(MsgId),
}

impl Signal {
    /// The message id carried, whatever the kind.
    #[inline]
    pub fn msg_id(self) -> MsgId {
        match self {
            Signal::Information(id) | Signal::Acknowledgement(id) => id,
        }
    }

    /// Label used in logs and CSV columns.
    pub fn kind_str(self) -> &'static str {
        match self {
            Signal::Information(_)     => "info",
            Signal::Acknowledgement(_) => "ack",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.kind_str(), self.msg_id())
    }
}
