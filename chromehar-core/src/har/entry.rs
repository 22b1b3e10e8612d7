use crate::correlate::CompletedRequest;
use crate::event::Response as CdpResponse;
use crate::har::{
    Cache, Content, Entry, EntryError, Request, Response, elapsed_ms, har_headers, har_timings,
    query_params, request_cookies, request_headers_size, response_cookies,
    response_headers_size, wall_time_to_datetime,
};
use url::Url;

/// `bodySize` of a request that carries no body.
pub const BODY_SIZE_UNKNOWN: i64 = -1;

/// Projects a completed request into a HAR entry.
///
/// Cache state and `pageref` are left empty; the report assembler sets `pageref`.
pub fn build_entry(request: &CompletedRequest<'_>) -> Result<Entry, EntryError> {
    let initial = request.initial;
    // A load can finish without a response event; project it as status 0.
    let fallback = CdpResponse::default();
    let response = request.response.map_or(&fallback, |r| &r.response);

    Ok(Entry {
        page_ref: None,
        started_date_time: wall_time_to_datetime(initial.wall_time),
        time: elapsed_ms(initial.timestamp, request.finished.timestamp),
        request: har_request(request, response)?,
        response: har_response(request, response)?,
        cache: Cache::default(),
        timings: har_timings(
            response.timing.as_ref(),
            initial.timestamp,
            request.finished.timestamp,
        ),
        server_ip_address: response
            .remote_ip_address
            .clone()
            .filter(|ip| !ip.is_empty()),
        connection: response.connection_id.map(|id| id.to_string()),
    })
}

fn protocol(response: &CdpResponse) -> &str {
    response.protocol.as_deref().unwrap_or_default()
}

fn har_request(
    request: &CompletedRequest<'_>,
    response: &CdpResponse,
) -> Result<Request, EntryError> {
    let cdp = &request.initial.request;

    let url = Url::parse(&cdp.url).map_err(|source| EntryError::InvalidUrl {
        request_id: request.request_id().clone(),
        url: cdp.url.clone(),
        source,
    })?;

    let body_size = cdp
        .post_data
        .as_ref()
        .map_or(BODY_SIZE_UNKNOWN, |body| body.len() as i64);

    Ok(Request {
        method: cdp.method.clone(),
        url: url.to_string(),
        http_version: protocol(response).to_string(),
        cookies: request_cookies(&cdp.headers),
        headers: har_headers(&cdp.headers),
        query_string: query_params(&url),
        headers_size: request_headers_size(&cdp.method, &url, protocol(response), &cdp.headers),
        body_size,
    })
}

fn har_response(
    request: &CompletedRequest<'_>,
    response: &CdpResponse,
) -> Result<Response, EntryError> {
    let redirect_url = match request.redirect {
        Some(redirect) => {
            let redirected = redirect.redirect_response.as_ref();
            if let Some(redirected) = redirected.filter(|r| !r.url.is_empty()) {
                parse_redirect_url(request, &redirected.url)?;
            }
            // The continuation's request is the hop the redirect pointed at.
            parse_redirect_url(request, &redirect.request.url)?.into()
        }
        None => String::new(),
    };

    let headers_size = response_headers_size(
        protocol(response),
        response.status,
        &response.status_text,
        &response.headers,
    );
    let body_size = request.finished.encoded_data_length - headers_size;

    let size: i64 = request.data_chunks.iter().map(|d| d.data_length).sum();

    Ok(Response {
        status: response.status,
        status_text: response.status_text.clone(),
        http_version: protocol(response).to_string(),
        cookies: response_cookies(&response.headers),
        headers: har_headers(&response.headers),
        content: Content {
            size,
            compression: Some(size - body_size),
            mime_type: response.mime_type.clone(),
        },
        redirect_url,
        headers_size,
        body_size,
    })
}

fn parse_redirect_url(request: &CompletedRequest<'_>, url: &str) -> Result<Url, EntryError> {
    Url::parse(url).map_err(|source| EntryError::InvalidRedirectUrl {
        request_id: request.request_id().clone(),
        url: url.to_string(),
        source,
    })
}
