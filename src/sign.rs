use crate::error::*;
use crate::{RequestSigner, SignableRequest};

pub trait SignRequest: Sized {
    /// Sign `request` with `signer` and attach the resulting Etvas headers.  The caller is
    /// responsible for sending the same method, path, query and body as were signed.
    fn sign_etvas(self, signer: &RequestSigner, request: &SignableRequest<'_>) -> Result<Self>;
}

impl SignRequest for reqwest::RequestBuilder {
    fn sign_etvas(self, signer: &RequestSigner, request: &SignableRequest<'_>) -> Result<Self> {
        let headers = signer.sign(request)?;
        Ok(self.headers(headers.header_map()?))
    }
}
