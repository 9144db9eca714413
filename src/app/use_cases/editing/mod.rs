//! Use-Case-Funktionen für Node/Kanten-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_node`: Neuen Node hinzufügen
//! - `connect`: Zwei-Klick-Auswahl für neue Kanten
//! - `delete_node`: Node samt inzidenter Kanten löschen
//! - `edit_weight`: Gewichtseingabe für bestehende Kante öffnen
//! - `clear`: Graph leeren

mod add_node;
mod clear;
mod connect;
mod delete_node;
mod edit_weight;

pub use add_node::add_node_at_position;
pub use clear::clear_graph;
pub use connect::select_edge_endpoint;
pub use delete_node::delete_node_at_position;
pub use edit_weight::begin_weight_edit;
