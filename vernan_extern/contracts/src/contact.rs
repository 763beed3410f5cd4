use std::future::Future;

use vernan_models::contact::ContactRequest;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Post a contact request to the remote endpoint.
    ///
    /// Returns an error only if no response could be obtained.
    fn submit(
        &self,
        request: ContactRequest,
    ) -> impl Future<Output = anyhow::Result<ContactApiResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactApiResponse {
    Accepted,
    /// The endpoint answered with a non-success status. `message` is taken
    /// from the JSON body if there was one.
    Rejected { message: Option<String> },
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(mut self, request: ContactRequest, result: ContactApiResponse) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_submit_error(mut self, request: ContactRequest, error: &'static str) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
