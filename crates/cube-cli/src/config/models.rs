use cubeio::core::io::cube::CubeMetadata;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterSettings {
    pub title: String,
    pub comment: String,
    pub keep_comments: bool,
}

impl WriterSettings {
    pub fn banner(&self) -> CubeMetadata {
        CubeMetadata {
            comments: [self.title.clone(), self.comment.clone()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometrySettings {
    pub symbol_width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub writer: WriterSettings,
    pub geometry: GeometrySettings,
}
