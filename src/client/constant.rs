pub const SITE_NAME: &str = "Brainstorm Sessions";
