use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Customer, Money, Product};
use service::OrderService;
use store::CustomerRepository;

fn bench_create_order(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let products: Vec<Product> = (0..100)
        .map(|i| {
            Product::new(format!("Ale {i}"), "House brew", Money::from_cents(100 + i)).unwrap()
        })
        .collect();
    let ids: Vec<_> = products.iter().map(Product::id).collect();

    let (service, customer_id) = rt.block_on(async {
        let service = OrderService::builder()
            .with_memory_customer_repository()
            .with_memory_product_repository(products)
            .await
            .unwrap()
            .build()
            .unwrap();
        let customer = Customer::new("Bench").unwrap();
        let id = customer.id();
        service.customers().add(customer).await.unwrap();
        (service, id)
    });

    c.bench_function("service/create_order_1_product", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.create_order(customer_id, &ids[..1]).await.unwrap();
            });
        });
    });

    c.bench_function("service/create_order_100_products", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.create_order(customer_id, &ids).await.unwrap();
            });
        });
    });
}

criterion_group!(benches, bench_create_order);
criterion_main!(benches);
