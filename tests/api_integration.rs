use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cryptocompare_api_client::api::{HistoryOptions, PriceAtTimeOptions, TopOptions};
use cryptocompare_api_client::gateway::RateGateway;
use cryptocompare_api_client::{CryptoCompare, CryptoCompareError};

fn build_api(server: &MockServer) -> CryptoCompare {
    let gateway = RateGateway::builder()
        .min_api_url(format!("{}/data", server.uri()))
        .site_api_url(format!("{}/api/data", server.uri()))
        .stats_url(format!("{}/stats", server.uri()))
        .build();
    CryptoCompare::with_gateway(gateway)
}

async fn mount_open_budget(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/stats/rate/limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "CallsMade": {"second": 1, "minute": 12, "hour": 140, "day": 900, "month": 17210},
            "CallsLeft": {"second": 49, "minute": 988, "hour": 2860, "day": 99100, "month": 982790}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_price_uppercases_symbols() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/price"))
        .and(query_param("fsym", "BTC"))
        .and(query_param("tsyms", "USD,EUR"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"USD": 4024.5, "EUR": 3538.2})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = build_api(&server);
    let prices = api.market.get_price("btc", "usd,eur", None).await.unwrap();

    assert_eq!(prices["USD"], 4024.5);
    assert_eq!(prices["EUR"], 3538.2);
}

#[tokio::test]
async fn test_invalid_symbol_fails_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/rate/limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let api = build_api(&server);
    let err = api
        .market
        .get_price("TOOLONGSYMBOL", "USD", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CryptoCompareError::InvalidParameter {
            field: "fsym",
            max_length: 10
        }
    ));
    assert_eq!(err.to_string(), "The max character length of fsym is 10");
}

#[tokio::test]
async fn test_get_multi_price_parses_nested_map() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/pricemulti"))
        .and(query_param("fsyms", "BTC,ETH"))
        .and(query_param("tsyms", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "BTC": {"USD": 4024.5},
            "ETH": {"USD": 108.6}
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let prices = api
        .market
        .get_multi_price("btc,eth", "usd", None)
        .await
        .unwrap();

    assert_eq!(prices["BTC"]["USD"], 4024.5);
    assert_eq!(prices["ETH"]["USD"], 108.6);
}

#[tokio::test]
async fn test_get_multi_full_extracts_raw_section() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/pricemultifull"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "RAW": {
                "BTC": {
                    "USD": {
                        "TYPE": "5",
                        "MARKET": "CCCAGG",
                        "FROMSYMBOL": "BTC",
                        "TOSYMBOL": "USD",
                        "FLAGS": "2049",
                        "PRICE": 4025.32,
                        "LASTUPDATE": 1545076500,
                        "VOLUME24HOUR": 105489.5,
                        "CHANGEPCT24HOUR": 0.377,
                        "SUPPLY": 17442512.0,
                        "MKTCAP": 70214372648.9
                    }
                }
            },
            "DISPLAY": {
                "BTC": {"USD": {"PRICE": "$ 4,025.32"}}
            }
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let tickers = api.market.get_multi_full("BTC", "USD", None).await.unwrap();

    let btc_usd = &tickers["BTC"]["USD"];
    assert_eq!(btc_usd.price, 4025.32);
    assert_eq!(btc_usd.flags, "2049");
    assert_eq!(btc_usd.market_cap, 70214372648.9);
    assert!(btc_usd.last_market.is_none());
}

#[tokio::test]
async fn test_get_exchange_average_keeps_market_case() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/generateAvg"))
        .and(query_param("fsym", "BTC"))
        .and(query_param("tsym", "USD"))
        .and(query_param("e", "Kraken,Coinbase"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "RAW": {
                "MARKET": "CUSTOMAGG",
                "FROMSYMBOL": "BTC",
                "TOSYMBOL": "USD",
                "FLAGS": 0,
                "PRICE": 4024.4,
                "LASTUPDATE": 1545076500
            },
            "DISPLAY": {"PRICE": "$ 4,024.4"}
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let average = api
        .market
        .get_exchange_average("btc", "usd", "Kraken,Coinbase", None)
        .await
        .unwrap();

    assert_eq!(average.market, "CUSTOMAGG");
    assert_eq!(average.price, 4024.4);
}

#[tokio::test]
async fn test_get_top_pairs_reads_data_array() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/top/pairs"))
        .and(query_param("fsym", "BTC"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Response": "Success",
            "Data": [
                {"exchange": "CCCAGG", "fromSymbol": "BTC", "toSymbol": "USD",
                 "volume24h": 105489.5, "volume24hTo": 423325440.4},
                {"exchange": "CCCAGG", "fromSymbol": "BTC", "toSymbol": "JPY",
                 "volume24h": 32911.9, "volume24hTo": 14929939129.0}
            ]
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let options = TopOptions::with_limit(5);
    let pairs = api.market.get_top_pairs("btc", Some(&options)).await.unwrap();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].to_symbol, "USD");
    assert_eq!(pairs[1].volume_24h, 32911.9);
}

#[tokio::test]
async fn test_get_minute_encodes_options() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/histominute"))
        .and(query_param("fsym", "BTC"))
        .and(query_param("tsym", "USD"))
        .and(query_param("limit", "2"))
        .and(query_param("e", "Kraken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Response": "Success",
            "Type": 100,
            "Aggregated": false,
            "Data": [
                {"time": 1545073200, "close": 4024.13, "high": 4031.97, "low": 4015.77,
                 "open": 4018.22, "volumefrom": 1867.12, "volumeto": 7509278.9},
                {"time": 1545073260, "close": 4026.5, "high": 4027.0, "low": 4023.1,
                 "open": 4024.13, "volumefrom": 204.8, "volumeto": 824301.4}
            ],
            "TimeTo": 1545073260,
            "TimeFrom": 1545073200,
            "FirstValueInArray": true,
            "ConversionType": {"type": "force_direct", "conversionSymbol": ""}
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let options = HistoryOptions {
        exchange: Some("Kraken".to_string()),
        limit: Some(2),
        ..Default::default()
    };
    let history = api
        .historic
        .get_minute("btc", "usd", Some(&options))
        .await
        .unwrap();

    assert_eq!(history.data.len(), 2);
    assert_eq!(history.data[1].close, 4026.5);
    assert_eq!(history.time_from, 1545073200);
}

#[tokio::test]
async fn test_get_price_at_time_extracts_base_symbol() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/pricehistorical"))
        .and(query_param("fsym", "BTC"))
        .and(query_param("tsyms", "USD,EUR"))
        .and(query_param("ts", "1544000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "BTC": {"USD": 3820.1, "EUR": 3355.5}
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let options = PriceAtTimeOptions::at(1544000000);
    let prices = api
        .historic
        .get_price_at_time("btc", "usd,eur", Some(&options))
        .await
        .unwrap();

    assert_eq!(prices["USD"], 3820.1);
    assert_eq!(prices["EUR"], 3355.5);
}

#[tokio::test]
async fn test_get_day_average_extracts_quote_symbol() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/dayAvg"))
        .and(query_param("fsym", "BTC"))
        .and(query_param("tsym", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "USD": 4011.76,
            "ConversionType": {"type": "direct", "conversionSymbol": ""}
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let average = api
        .historic
        .get_day_average("btc", "usd", None)
        .await
        .unwrap();

    assert_eq!(average, 4011.76);
}

#[tokio::test]
async fn test_get_coin_list_parses_directory() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/all/coinlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Response": "Success",
            "Message": "Coin list successfully returned!",
            "Data": {
                "BTC": {
                    "Id": "1182", "Url": "/coins/btc/overview", "ImageUrl": "/media/19633/btc.png",
                    "Name": "BTC", "Symbol": "BTC", "CoinName": "Bitcoin",
                    "FullName": "Bitcoin (BTC)", "Algorithm": "SHA256", "ProofType": "PoW",
                    "FullyPremined": "0", "TotalCoinSupply": "21000000",
                    "PreMinedValue": "N/A", "TotalCoinsFreeFloat": "N/A",
                    "SortOrder": "1", "Sponsored": false
                }
            }
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let list = api.coins.get_coin_list().await.unwrap();

    assert_eq!(list.response, "Success");
    assert_eq!(list.coins["BTC"].full_name, "Bitcoin (BTC)");
}

#[tokio::test]
async fn test_get_pair_snapshot_hits_site_api() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/data/coinsnapshot/"))
        .and(query_param("fsym", "BTC"))
        .and(query_param("tsym", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Response": "Success",
            "Message": "Coin snapshot successfully returned",
            "Type": 100,
            "Data": {
                "Algorithm": "SHA256",
                "ProofType": "PoW",
                "AggregatedData": {
                    "TYPE": 5, "MARKET": "CCCAGG", "FROMSYMBOL": "BTC", "TOSYMBOL": "USD",
                    "FLAGS": 4, "PRICE": 4024.54, "LASTUPDATE": 1545074953
                },
                "Exchanges": []
            }
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let snapshot = api.coins.get_pair_snapshot("btc", "usd").await.unwrap();

    assert_eq!(snapshot.data.aggregated_data.price, 4024.54);
    assert!(snapshot.data.exchanges.is_empty());
}

#[tokio::test]
async fn test_list_exchanges_parses_nested_map() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/all/exchanges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Coinbase": {"BTC": ["USD", "EUR"], "ETH": ["USD"]},
            "Kraken": {"BTC": ["USD"]}
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let exchanges = api.exchanges.list_exchanges().await.unwrap();

    assert_eq!(exchanges["Coinbase"]["BTC"], vec!["USD", "EUR"]);
    assert_eq!(exchanges.len(), 2);
}

#[tokio::test]
async fn test_get_top_exchanges_reads_data_array() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/top/exchanges"))
        .and(query_param("fsym", "BTC"))
        .and(query_param("tsym", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Response": "Success",
            "Data": [
                {"exchange": "Bitstamp", "fromSymbol": "BTC", "toSymbol": "USD",
                 "volume24h": 8442.5, "volume24hTo": 33986236.5}
            ]
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let top = api
        .exchanges
        .get_top_exchanges("btc", "usd", None)
        .await
        .unwrap();

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].exchange, "Bitstamp");
}

#[tokio::test]
async fn test_mining_contracts_skip_the_budget_check() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/rate/limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/data/miningcontracts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Response": "Success",
            "Message": "",
            "MiningData": {
                "2316": {"Id": 2316, "Company": "Genesis Mining", "Name": "SHA-256 Contract",
                         "Algorithm": "SHA256", "Cost": 1520.0, "Currency": "USD"}
            },
            "CoinData": {},
            "Type": 100
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = build_api(&server);
    let contracts = api.mining.get_contracts().await.unwrap();

    assert_eq!(contracts.contracts[&2316].company, "Genesis Mining");
}

#[tokio::test]
async fn test_news_stories_parse_a_bare_array() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/news/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "85721",
                "published_on": 1545080400,
                "title": "Bitcoin Holds Above $4,000",
                "url": "https://example.com/news-1",
                "source": "cryptoglobe",
                "body": "Bitcoin held above the $4,000 mark...",
                "tags": "Trading",
                "lang": "EN"
            }
        ])))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let stories = api.news.list_stories().await.unwrap();

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].title, "Bitcoin Holds Above $4,000");
}

#[tokio::test]
async fn test_news_providers_list() {
    let server = MockServer::start().await;
    mount_open_budget(&server).await;

    Mock::given(method("GET"))
        .and(path("/data/news/providers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"key": "coindesk", "name": "CoinDesk", "lang": "EN",
             "img": "https://images.cryptocompare.com/news/default/coindesk.png"}
        ])))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let providers = api.news.list_providers().await.unwrap();

    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].key, "coindesk");
}

#[tokio::test]
async fn test_social_stats_skip_the_budget_check() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/rate/limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/data/socialstats/"))
        .and(query_param("id", "1182"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Response": "Success",
            "Message": "Social data successfully returned",
            "Type": 100,
            "Data": {
                "General": {"Name": "BTC", "CoinName": "Bitcoin", "Points": 7644180}
            }
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let stats = api.social.get_stats(1182).await.unwrap();

    assert_eq!(stats.data.general.unwrap().points, 7644180);
}

#[tokio::test]
async fn test_exhausted_budget_surfaces_out_of_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/rate/limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "CallsMade": {"second": 50, "minute": 1000, "hour": 3000},
            "CallsLeft": {"second": 0, "minute": 0, "hour": 0}
        })))
        .mount(&server)
        .await;

    let api = build_api(&server);
    let err = api.news.list_stories().await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "No more news calls are left, please try later"
    );
}
