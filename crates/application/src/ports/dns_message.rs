use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;

/// What the host root server answered for a native-zone question.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeResponse {
    pub answer: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
    pub aa: bool,
    pub response_code: ResponseCode,
}

impl NativeResponse {
    pub fn new(answer: Vec<Record>, authority: Vec<Record>, aa: bool) -> Self {
        Self {
            answer,
            authority,
            additional: Vec::new(),
            aa,
            response_code: ResponseCode::NoError,
        }
    }

    pub fn with_response_code(mut self, response_code: ResponseCode) -> Self {
        self.response_code = response_code;
        self
    }

    pub fn has_authority(&self) -> bool {
        !self.authority.is_empty()
    }

    /// Smallest TTL across every section, `None` when all are empty.
    pub fn min_ttl(&self) -> Option<u32> {
        self.answer
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
            .map(|r| r.ttl())
            .min()
    }
}

/// The message handed back to the server front-end.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMessage {
    pub answer: Vec<Record>,
    pub authority: Vec<Record>,
    pub additional: Vec<Record>,
    pub aa: bool,
    pub response_code: ResponseCode,
}

impl ResponseMessage {
    pub fn new(answer: Vec<Record>, authority: Vec<Record>, aa: bool) -> Self {
        Self {
            answer,
            authority,
            additional: Vec::new(),
            aa,
            response_code: ResponseCode::NoError,
        }
    }

    /// Returned while the extension backend is not ready. Never cached.
    pub fn refused() -> Self {
        Self::empty(ResponseCode::Refused)
    }

    pub fn server_failure() -> Self {
        Self::empty(ResponseCode::ServFail)
    }

    pub fn is_refused(&self) -> bool {
        self.response_code == ResponseCode::Refused
    }

    fn empty(response_code: ResponseCode) -> Self {
        Self {
            answer: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            aa: false,
            response_code,
        }
    }
}

impl From<NativeResponse> for ResponseMessage {
    fn from(native: NativeResponse) -> Self {
        Self {
            answer: native.answer,
            authority: native.authority,
            additional: native.additional,
            aa: native.aa,
            response_code: native.response_code,
        }
    }
}
