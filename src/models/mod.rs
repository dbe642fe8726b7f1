pub mod atleta;
pub mod conversa;
pub mod lembrete;
pub mod treinador;

pub use atleta::{Ambiente, Atleta, AtletaPatch, NivelExperiencia, NovoAtleta, Status};
pub use conversa::{HandoffNote, LogConversa, NovaHandoffNote, NovoLogConversa};
pub use lembrete::{Lembrete, NovoLembrete};
pub use treinador::{NovoTreinador, Treinador};
