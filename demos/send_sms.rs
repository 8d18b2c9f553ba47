//! Example: send SMS through the TencentCloud request pipeline.
//!
//! This example demonstrates how to:
//! - Create credentials and a service config
//! - Build a client
//! - Send SMS messages
//! - Handle responses and errors
//!
//! Before running this example, make sure to:
//! 1. Set environment variables:
//!    - TENCENTCLOUD_SECRET_ID
//!    - TENCENTCLOUD_SECRET_KEY
//! 2. Replace the placeholder values with your actual SMS configuration
//!
//! Usage:
//! ```
//! cargo run --example send_sms
//! ```

use tencentcloud_sdk_core::{
    Client, Credential, EndpointPreference, HttpProfile, Region, SendSmsRequest, SendSmsResponse,
    ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("TencentCloud SMS example");
    println!("=========================");

    println!("\n1. Basic SMS sending:");
    basic_send_sms().await?;

    println!("\n2. SMS sending with custom configuration:");
    send_sms_with_config().await?;

    println!("\n3. International SMS sending:");
    send_international_sms().await?;

    println!("\n4. Error handling:");
    handle_errors().await?;

    Ok(())
}

fn service_config() -> ServiceConfig {
    ServiceConfig::new(Region::new("ap-guangzhou"), "sms", "2021-01-11")
}

/// Basic SMS sending example
async fn basic_send_sms() -> Result<(), Box<dyn std::error::Error>> {
    let credential =
        Credential::from_env().map_err(|e| format!("Failed to load credentials: {}", e))?;

    let client = Client::builder()
        .credential(credential)
        .service_config(service_config())
        .build()?;

    let request = SendSmsRequest::new(
        vec!["+8613800000000".to_string()], // Replace with actual phone numbers
        "1400000000",                       // Replace with your SMS SDK App ID
        "123456",                           // Replace with your template ID
        "YourSignature",                    // Replace with your signature
        vec!["123456".to_string()],         // Template parameters
    );

    if let Err(e) = request.validate() {
        println!("Request validation failed: {}", e);
        return Ok(());
    }

    match client.call::<_, SendSmsResponse>("SendSms", &request).await {
        Ok(response) => {
            println!("SMS sent successfully!");
            println!("Request ID: {}", response.request_id);
            println!("Total messages: {}", response.send_status_set.len());
            println!("Successful: {}", response.success_count());
            println!("Failed: {}", response.failed_count());
            println!("Total fee: {}", response.get_total_fee());

            for status in &response.send_status_set {
                println!(
                    "Phone: {}, Status: {}, Message: {}",
                    status.phone_number, status.code, status.message
                );
            }
        }
        Err(e) => {
            println!("Failed to send SMS: {}", e.print_all());
        }
    }

    Ok(())
}

/// SMS sending with custom configuration
async fn send_sms_with_config() -> Result<(), Box<dyn std::error::Error>> {
    let credential =
        Credential::from_env().map_err(|e| format!("Failed to load credentials: {}", e))?;

    let mut http_profile = HttpProfile::new();
    http_profile
        .set_req_timeout(30)
        .set_connect_timeout(30)
        .set_keep_alive(true);

    let client = Client::builder()
        .credential(credential)
        .service_config(service_config())
        .http_profile(http_profile)
        .debug(true)
        .build()?;

    let mut request = SendSmsRequest::new(
        vec!["+8613800000000".to_string()],
        "1400000000",
        "123456",
        "YourSignature",
        vec!["123456".to_string()],
    );

    request
        .set_session_context("example_session_123")
        .set_extend_code("01");

    match client.call::<_, SendSmsResponse>("SendSms", &request).await {
        Ok(response) => {
            println!("SMS sent with custom config!");
            println!("Request ID: {}", response.request_id);

            for phone in &["+8613800000000"] {
                if response.check_phone_success(phone) {
                    println!("OK {} - Success", phone);
                } else {
                    println!("FAIL {} - Failed", phone);
                }
            }
        }
        Err(e) => {
            println!("Failed to send SMS: {}", e.print_all());
        }
    }

    Ok(())
}

/// International SMS sending example
async fn send_international_sms() -> Result<(), Box<dyn std::error::Error>> {
    let credential =
        Credential::from_env().map_err(|e| format!("Failed to load credentials: {}", e))?;

    let client = Client::builder()
        .credential(credential)
        .service_config(
            service_config().with_endpoint_preference(EndpointPreference::Regional),
        )
        .build()?;

    let request = SendSmsRequest::new_international(
        vec!["+1234567890".to_string()],
        "1400000000",
        "123456",
        vec!["123456".to_string()],
    );

    match client.call::<_, SendSmsResponse>("SendSms", &request).await {
        Ok(response) => {
            println!("International SMS sent successfully!");
            println!("Request ID: {}", response.request_id);

            for status in &response.send_status_set {
                println!(
                    "Phone: {}, Country: {}, Status: {}, Fee: {}",
                    status.phone_number, status.iso_code, status.code, status.fee
                );
            }
        }
        Err(e) => {
            println!("Failed to send international SMS: {}", e.print_all());
        }
    }

    Ok(())
}

/// Error handling examples
async fn handle_errors() -> Result<(), Box<dyn std::error::Error>> {
    let credential = Credential::new("invalid_id", "invalid_key", None);
    let client = Client::builder()
        .credential(credential)
        .service_config(service_config())
        .build()?;

    let request = SendSmsRequest::new(
        vec!["+8613800000000".to_string()],
        "1400000000",
        "123456",
        "YourSignature",
        vec!["123456".to_string()],
    );

    match client.call::<_, SendSmsResponse>("SendSms", &request).await {
        Ok(_) => {
            println!("Unexpected success with invalid credentials");
        }
        Err(e) => {
            println!("Expected error occurred:");
            println!("Error type: {}", e);
            println!("Error details: {}", e.print_all());

            if e.is_network_error() {
                println!("This is a network error");
            } else if let Some(code) = e.code() {
                println!("API error code: {}", code);

                match code {
                    "UnauthorizedOperation.SmsSdkAppIdVerifyFail" => {
                        println!("Solution: Check your SMS SDK App ID");
                    }
                    "FailedOperation.SignatureIncorrectOrUnapproved" => {
                        println!("Solution: Check your SMS signature");
                    }
                    "FailedOperation.TemplateIncorrectOrUnapproved" => {
                        println!("Solution: Check your SMS template");
                    }
                    _ => {
                        println!("Unknown error code: {}", code);
                    }
                }
            }
        }
    }

    Ok(())
}
