/// A lead inquiry as submitted by the quote and contact forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub city: String,
    pub service_interest: String,
    #[serde(default)]
    pub message: String,
}

/// Acknowledgement that the CRM backend accepted an inquiry.
#[derive(Debug, Clone)]
pub struct InquiryReceipt {
    pub backend: String,
}

actor_message!(SubmitInquiry(inquiry: Inquiry) -> InquiryReceipt);

#[cfg(test)]
actor_message!(GetInquiries() -> Vec<Inquiry>);

#[derive(Serialize, Deserialize)]
pub struct InquiryV1 {
    pub accepted: bool,
    pub backend: String,
}

json_responder!(InquiryV1);

impl From<InquiryReceipt> for InquiryV1 {
    fn from(receipt: InquiryReceipt) -> Self {
        Self {
            accepted: true,
            backend: receipt.backend,
        }
    }
}
