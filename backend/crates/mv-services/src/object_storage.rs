use log::debug;
use mv_config::LatencyConfig;
use mv_core::Envelope;
use serde::{Deserialize, Serialize};

/// Bucket holding uploaded scans
pub const MEDICAL_IMAGES_BUCKET: &str = "medical-images";

/// Every uploaded object resolves to this public URL.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1516549655169-df83a0774514?w=800&q=80";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedObject {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUrl {
    #[serde(rename = "publicUrl")]
    pub public_url: String,
}

/// Object storage stand-in. Uploads are acknowledged but the bytes are not
/// kept anywhere.
#[derive(Debug, Clone)]
pub struct ObjectStorage {
    latency: LatencyConfig,
}

impl ObjectStorage {
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }

    pub async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
    ) -> Envelope<UploadedObject> {
        tokio::time::sleep(self.latency.upload()).await;
        debug!("Accepted {} bytes for {}/{}", bytes.len(), bucket, path);

        Envelope::ok(UploadedObject {
            path: path.to_string(),
        })
    }

    pub fn get_public_url(&self, _bucket: &str, _path: &str) -> PublicUrl {
        PublicUrl {
            public_url: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}
