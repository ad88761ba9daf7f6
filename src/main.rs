#[actix_web::main]
async fn main() {
    if let Err(err) = qa_casegen_lib::run().await {
        tracing::error!(error = %err, "QA test case generator stopped");
        std::process::exit(1);
    }
}
