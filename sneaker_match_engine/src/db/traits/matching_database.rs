/// The root trait for backends supporting the match engine.
///
/// Every other storage trait builds on this one, so that an API which needs several of them sees a single error type.
#[allow(async_fn_in_trait)]
pub trait MatchingDatabase: Clone {
    type Error: std::error::Error;

    /// The URL of the database
    fn url(&self) -> &str;

    /// Closes the database connection.
    async fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
