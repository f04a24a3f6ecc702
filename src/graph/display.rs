//! Diagnostic dump of the whole structure.

use core::fmt;

use crate::graph::DiGraph;
use crate::store::NodeSlot;

/// Lists every slot with its outgoing and incoming arcs, tombstones
/// included. Outgoing arcs print as `target(weight)#ordinal` with 1-based
/// ordinals. Useful in tests and debugging sessions; not a stable format.
impl<T: fmt::Display> fmt::Display for DiGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index_bound() == 0 {
            return writeln!(f, "graph is empty");
        }
        for (index, slot) in self.store.slots().iter().enumerate() {
            match slot {
                NodeSlot::Tombstone => writeln!(f, "({index}) <removed>")?,
                NodeSlot::Occupied(record) => {
                    write!(f, "({index}) {}: out [", record.payload)?;
                    for (pos, arc) in record.outgoing.iter().enumerate() {
                        if pos > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{}({})#{}", arc.node, arc.weight, pos + 1)?;
                    }
                    write!(f, "] in [")?;
                    for (pos, arc) in record.incoming.iter().enumerate() {
                        if pos > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{}({})", arc.node, arc.weight)?;
                    }
                    writeln!(f, "]")?;
                }
            }
        }
        Ok(())
    }
}
