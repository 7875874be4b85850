pub mod roster_json;

pub use roster_json::{
    generate_class_json, generate_roster_json, ApiError, ApiResponse, ClassRequest,
    GenerationResponse, RosterRequest, API_VERSION,
};
