use ferrous_root_application::ports::ResponseMessage;
use ferrous_root_application::services::RecordTypeMapper;
use ferrous_root_application::use_cases::HandleRootQueryUseCase;
use ferrous_root_domain::DnsRequest;
use hickory_proto::op::ResponseCode;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error};

pub struct RootServerHandler {
    use_case: Arc<HandleRootQueryUseCase>,
}

impl RootServerHandler {
    pub fn new(use_case: Arc<HandleRootQueryUseCase>) -> Self {
        Self { use_case }
    }

    fn normalize_domain(domain: &str) -> String {
        domain.trim_end_matches('.').to_ascii_lowercase()
    }
}

#[async_trait::async_trait]
impl RequestHandler for RootServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let domain = Self::normalize_domain(&query.name().to_string());
        let hickory_record_type = query.query_type();
        let client_ip = request.src().ip();

        debug!(domain = %domain, record_type = ?hickory_record_type, client = %client_ip, "Root query received");

        // Unnamed types reach the dispatcher too; it owns the readiness gate.
        let record_type = RecordTypeMapper::from_hickory(hickory_record_type);

        let dns_request = DnsRequest::new(domain, record_type, client_ip);
        let tld = dns_request.tld().to_string();

        let response = self.use_case.execute(&tld, &dns_request).await;

        debug!(
            domain = %dns_request.domain,
            rcode = ?response.response_code,
            aa = response.aa,
            answers = response.answer.len(),
            authority = response.authority.len(),
            "Sending response"
        );

        send_response(request, &mut response_handle, &response).await
    }
}

async fn send_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    message: &ResponseMessage,
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_authoritative(message.aa);
    header.set_response_code(message.response_code);
    header.set_recursion_available(false);

    let response = builder.build(
        header,
        message.answer.iter(),
        message.authority.iter(),
        &[],
        message.additional.iter(),
    );

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            ResponseInfo::from(*request.header())
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_recursion_available(false);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
