use reqwest::StatusCode;

#[derive(Debug)]
pub struct Response(pub(crate) reqwest::Response);

impl Response {
    pub fn status(&self) -> StatusCode {
        self.0.status()
    }
}
