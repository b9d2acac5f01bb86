#[actix_web::main]
async fn main() -> std::io::Result<()> {
    child_report_server::run().await
}
