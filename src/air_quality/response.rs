/// Body returned by AirVisual when it rejects a request, e.g.
/// `{"status":"fail","data":{"message":"city_not_found"}}`
#[derive(serde::Deserialize, Debug)]
pub struct FailureResponse {
    /// Always "fail" for rejected requests
    pub status: String,
    pub data: FailureData,
}

#[derive(serde::Deserialize, Debug)]
pub struct FailureData {
    /// Machine-readable reason such as "incorrect_api_key" or "call_limit_reached"
    pub message: String,
}

impl FailureResponse {
    /// Extracts the failure message from a raw response body, if it has the expected shape.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<FailureResponse>(body)
            .ok()
            .filter(|failure| failure.status == "fail")
            .map(|failure| failure.data.message)
    }
}
