use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Two vectors, serialized with the API's `Ax`/`Ay`/`Bx`/`By` field names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct VectorPair {
    pub Ax: f64,
    pub Ay: f64,
    pub Bx: f64,
    pub By: f64,
}

impl VectorPair {
    pub fn new(a: Vector, b: Vector) -> Self {
        Self {
            Ax: a.x,
            Ay: a.y,
            Bx: b.x,
            By: b.y,
        }
    }
}

#[derive(Debug, Serialize)]
struct VectorList<'a> {
    vectors: &'a [Vector],
}

/// The `{success, result, detail}` envelope every operation returns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[allow(non_snake_case)]
pub struct SumResponse {
    pub Rx: f64,
    pub Ry: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DotResponse {
    pub producto_punto: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[allow(non_snake_case)]
pub struct MagnitudeResponse {
    pub magnitud_A: f64,
    pub magnitud_B: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AngleResponse {
    pub angulo_grados: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub struct VectorClient {
    client: Client,
    base_url: String,
}

impl VectorClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn sum(&self, pair: VectorPair) -> Result<Envelope<SumResponse>, Box<dyn std::error::Error>> {
        self.post("suma_vectores", &pair).await
    }

    pub async fn sum_list(&self, vectors: &[Vector]) -> Result<Envelope<SumResponse>, Box<dyn std::error::Error>> {
        self.post("suma_lista", &VectorList { vectors }).await
    }

    pub async fn dot(&self, pair: VectorPair) -> Result<Envelope<DotResponse>, Box<dyn std::error::Error>> {
        self.post("producto_punto", &pair).await
    }

    pub async fn magnitude(&self, pair: VectorPair) -> Result<Envelope<MagnitudeResponse>, Box<dyn std::error::Error>> {
        self.post("magnitud_vectores", &pair).await
    }

    /// A zero vector yields `Ok` with `success == false`, not an error.
    pub async fn angle(&self, pair: VectorPair) -> Result<Envelope<AngleResponse>, Box<dyn std::error::Error>> {
        self.post("angulo_vectores", &pair).await
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<Envelope<T>, Box<dyn std::error::Error>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(format!("{}/api/{}", self.base_url, endpoint))
            .json(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Box<dyn std::error::Error>> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Service returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str::<T>(&text)?)
    }
}
