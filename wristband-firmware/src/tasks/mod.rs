// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Der WiFi Task meldet Verbindungs-Änderungen per Signal an den
// Kommando-Server; nur der Kommando-Server schreibt auf LED und Motoren.

pub mod command_server;
pub mod mdns;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use command_server::command_server_task;
pub use mdns::mdns_responder_task;
pub use wifi::{connection_task, net_task};
