use std::{
    net::{Ipv4Addr, SocketAddr},
    path::Path,
};

use pretty_assertions::assert_eq;
use tokio::net::TcpListener;
use vernan_config::DEFAULT_CONFIG_PATH;
use vernan_demo::contact::{BAR_REQUEST, FOO_REQUEST};
use vernan_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use vernan_extern_impl::contact::{ContactApiServiceConfig, ContactApiServiceImpl};
use vernan_models::contact::ContactRequest;
use vernan_testing::contact::{
    router, CONTACT_ROUTE, DUPLICATE_MESSAGE, REJECT_EMPTY_NAME, REJECT_PLAIN_NAME,
};
use vernan_utils::assert_matches;

#[tokio::test]
async fn accepted() {
    let sut = make_sut(serve().await);
    let result = sut.submit(FOO_REQUEST.clone()).await.unwrap();
    assert_eq!(result, ContactApiResponse::Accepted);
}

#[tokio::test]
async fn rejected_with_message() {
    let sut = make_sut(serve().await);
    sut.submit(BAR_REQUEST.clone()).await.unwrap();

    let result = sut.submit(BAR_REQUEST.clone()).await.unwrap();

    assert_eq!(
        result,
        ContactApiResponse::Rejected {
            message: Some(DUPLICATE_MESSAGE.into())
        }
    );
}

#[tokio::test]
async fn rejected_plain_text() {
    let sut = make_sut(serve().await);
    let request = ContactRequest {
        name: REJECT_PLAIN_NAME.into(),
        ..FOO_REQUEST.clone()
    };

    let result = sut.submit(request).await.unwrap();

    assert_eq!(result, ContactApiResponse::Rejected { message: None });
}

#[tokio::test]
async fn rejected_empty_json() {
    let sut = make_sut(serve().await);
    let request = ContactRequest {
        name: REJECT_EMPTY_NAME.into(),
        ..FOO_REQUEST.clone()
    };

    let result = sut.submit(request).await.unwrap();

    assert_eq!(result, ContactApiResponse::Rejected { message: None });
}

#[tokio::test]
async fn connection_refused() {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sut = make_sut(addr);
    let result = sut.submit(FOO_REQUEST.clone()).await;

    assert_matches!(result, Err(_));
}

/// Serves the testing contact endpoint on an ephemeral port.
async fn serve() -> SocketAddr {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router()).await.unwrap() });
    addr
}

fn make_sut(addr: SocketAddr) -> ContactApiServiceImpl {
    let endpoint_override =
        format!("contact.endpoint_override = \"http://{addr}{CONTACT_ROUTE}\"");
    let config = vernan_config::load_with_override(
        &[Path::new(DEFAULT_CONFIG_PATH)],
        &[endpoint_override.as_str()],
    )
    .unwrap();

    ContactApiServiceImpl::new(ContactApiServiceConfig::new(
        config.contact.endpoint_override,
    ))
    .unwrap()
}
