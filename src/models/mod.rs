// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FieldError, FilterCriteria, Lenient, NavigationIntent, SubjectField, TeacherProfile, TutorRecord, MAX_RATING};
pub use requests::{PriceRequest, RatingRequest, SearchRequest, SelectTutorRequest, ToggleSubjectRequest};
pub use responses::{DiscoveryView, ErrorResponse, HealthResponse, SessionCreatedResponse};
