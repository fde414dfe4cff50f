// Standardized error codes for the Symptom Intake Engine

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const AUDIO_TOO_LONG: &str = "VALIDATION_1003";
}

pub mod collaborator {
    pub const TRANSCRIPTION_FAILED: &str = "COLLAB_2001";
    pub const RECOGNITION_FAILED: &str = "COLLAB_2002";
    pub const TRANSCRIPTION_DISABLED: &str = "COLLAB_2003";
}

pub mod upload {
    pub const STORAGE_FAILED: &str = "UPLOAD_3001";
    pub const MALFORMED_MULTIPART: &str = "UPLOAD_3002";
}

pub mod configuration {
    pub const INVALID_CONFIGURATION: &str = "CONFIG_4001";
    pub const SYMPTOM_TABLE_UNAVAILABLE: &str = "CONFIG_4002";
}

pub mod system {
    pub const NETWORK_FAILURE: &str = "SYS_5001";
    pub const INTERNAL_FAILURE: &str = "SYS_5002";
}
