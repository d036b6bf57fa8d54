use crate::adapters::protocol::frame;
use crate::adapters::protocol::parser::request_parser::RequestParser;
use crate::adapters::protocol::parser::response_encoder::ResponseEncoder;
use crate::ports::incoming::message_handler::MessageHandler;
use crate::{ApplicationError, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

pub struct TcpAdapter {
    listener: TcpListener,
    message_handler: Arc<dyn MessageHandler>,
    parser: RequestParser,
    encoder: ResponseEncoder,
}

impl TcpAdapter {
    pub async fn new(addr: &str, message_handler: Arc<dyn MessageHandler>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await.map_err(ApplicationError::Io)?;
        Ok(Self {
            listener,
            message_handler,
            parser: RequestParser::new(),
            encoder: ResponseEncoder::new(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(ApplicationError::Io)
    }

    pub async fn run(&self) -> Result<()> {
        println!("Server listening on {}", self.local_addr()?);

        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    println!("Accepted connection from {}", peer);
                    let message_handler = Arc::clone(&self.message_handler);
                    let parser = self.parser.clone();
                    let encoder = self.encoder.clone();

                    tokio::spawn(async move {
                        if let Err(e) =
                            handle_connection(stream, message_handler, parser, encoder).await
                        {
                            println!("Connection error: {}", e);
                        }
                    });
                }
                Err(e) => println!("Accept error: {}", e),
            }
        }
    }
}

/// One request fully read, parsed, and answered before the next read
/// begins. Codec errors propagate out and drop the connection with no
/// partial response; unsupported versions are answered inline and the
/// loop continues.
async fn handle_connection(
    mut stream: TcpStream,
    message_handler: Arc<dyn MessageHandler>,
    parser: RequestParser,
    encoder: ResponseEncoder,
) -> Result<()> {
    loop {
        let payload = match frame::read_frame(&mut stream).await? {
            Some(payload) => payload,
            None => {
                println!("Client closed connection");
                return Ok(());
            }
        };

        let request = parser.parse(&payload)?;
        let response = message_handler.handle_request(request).await?;
        let encoded = encoder.encode(response);
        frame::write_frame(&mut stream, &encoded).await?;
    }
}
