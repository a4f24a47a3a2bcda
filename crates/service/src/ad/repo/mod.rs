pub mod seaorm;

pub use seaorm::SeaOrmAdRepository;
