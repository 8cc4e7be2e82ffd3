use locrec::LocationIndex;

fn main() {
    let index = LocationIndex::global();

    println!("=== locrec 地名识别演示 ===\n");

    let test_cases = vec![
        // 省市连写
        "浙江杭州",
        // 完整句子
        "下周去浙江杭州出差，顺便逛逛西湖",
        // 只提区县，上级链补全
        "南山的写字楼",
        "昆山的工厂下周复工",
        // 直辖市
        "住在北京海淀",
        "从上海浦东机场出发",
        // 多个城市混合
        "从深圳飞厦门再到青岛",
        // 无法识别
        "一段没有地名的文本",
        "",
    ];

    for text in test_cases {
        let result = index.identify(text);
        println!("输入: \"{}\"", text);
        if result.is_empty() {
            println!("  （未识别出地名）");
        } else {
            for (kind, name) in result.iter() {
                println!("  {} : {}", kind, name);
            }
        }
        println!();
    }
}
